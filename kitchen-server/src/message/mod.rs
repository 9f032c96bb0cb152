//! 消息总线模块
//!
//! 状态变更广播的进程内核心。网络传输 (WebSocket/TCP) 由宿主挂接
//! [`MessageBus::subscribe`] 自行实现。

pub mod bus;

pub use bus::MessageBus;
