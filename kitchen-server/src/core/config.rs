use crate::kitchen::ScorePolicy;

/// 服务器配置 - 所有配置项
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | HTTP_PORT | 3000 | HTTP 服务端口 |
/// | ENVIRONMENT | development | 运行环境 |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_DIR | (无) | 日志文件目录 |
/// | QUICK_COOK_BONUS | 100 | 快手菜加成 |
/// | EMPTY_TABLE_BONUS | 50 | 空桌公平加成 |
/// | SINGLE_SERVED_BONUS | 25 | 准空桌加成 |
/// | REMOTE_ORDER_BONUS | 30 | 外带/配送加成 |
/// | HIGH_PRIORITY_WAIT_MIN | 20 | 高优先等待阈值 (分钟) |
/// | CRITICAL_WAIT_MIN | 30 | 临界等待阈值 (分钟) |
///
/// 评分权重是运营策略而非硬编码规则, 上线前应结合实际后厨节奏校准。
///
/// # 示例
///
/// ```ignore
/// HTTP_PORT=8080 QUICK_COOK_BONUS=80 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 运行环境: development | staging | production
    pub environment: String,
    /// 评分策略
    pub score_policy: ScorePolicy,
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        let defaults = ScorePolicy::default();
        Self {
            http_port: env_parse("HTTP_PORT", 3000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            score_policy: ScorePolicy {
                quick_cook_bonus: env_parse("QUICK_COOK_BONUS", defaults.quick_cook_bonus),
                empty_table_bonus: env_parse("EMPTY_TABLE_BONUS", defaults.empty_table_bonus),
                single_served_bonus: env_parse("SINGLE_SERVED_BONUS", defaults.single_served_bonus),
                remote_order_bonus: env_parse("REMOTE_ORDER_BONUS", defaults.remote_order_bonus),
                high_priority_wait_min: env_parse(
                    "HIGH_PRIORITY_WAIT_MIN",
                    defaults.high_priority_wait_min,
                ),
                critical_wait_min: env_parse("CRITICAL_WAIT_MIN", defaults.critical_wait_min),
            },
        }
    }

    /// 使用自定义端口覆盖配置
    ///
    /// 常用于测试场景
    pub fn with_port(http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.http_port = http_port;
        config
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
