use chrono_tz::Tz;
use thiserror::Error;

/// Default business timezone
const DEFAULT_TIMEZONE: &str = "Asia/Tokyo";

/// Default capacity of the floor event broadcast channel
const DEFAULT_EVENT_CHANNEL_CAPACITY: usize = 1024;

/// Default bound on journaled events and remembered command ids
const DEFAULT_JOURNAL_CAPACITY: usize = 10_000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

/// Engine configuration
///
/// # 环境变量
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | BASE_DOMAIN | localhost | 店铺子域名的根域名 |
/// | TIMEZONE | Asia/Tokyo | 营业时区 (IANA) |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_DIR | (none) | 日志目录，存在时按日滚动写入 |
/// | EVENT_CHANNEL_CAPACITY | 1024 | 事件广播通道容量 |
/// | JOURNAL_CAPACITY | 10000 | 内存事件日志与已处理命令的上限 |
/// | ENVIRONMENT | development | 运行环境 |
#[derive(Debug, Clone)]
pub struct Config {
    /// Root domain; stores live at `<slug>.<base_domain>`
    pub base_domain: String,
    /// Business timezone, used for default start times
    pub timezone: Tz,
    pub log_level: String,
    pub log_dir: Option<String>,
    pub event_channel_capacity: usize,
    pub journal_capacity: usize,
    /// development | staging | production
    pub environment: String,
}

impl Config {
    /// Load `.env` (if present) and read the environment
    pub fn load() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_env()
    }

    /// 从环境变量加载配置
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unset keys take their defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let timezone_name = lookup("TIMEZONE").unwrap_or_else(|| DEFAULT_TIMEZONE.into());
        let timezone: Tz = timezone_name
            .parse()
            .map_err(|_| ConfigError::InvalidTimezone(timezone_name.clone()))?;

        let event_channel_capacity = parse_capacity(
            &lookup,
            "EVENT_CHANNEL_CAPACITY",
            DEFAULT_EVENT_CHANNEL_CAPACITY,
        )?;
        let journal_capacity =
            parse_capacity(&lookup, "JOURNAL_CAPACITY", DEFAULT_JOURNAL_CAPACITY)?;

        Ok(Self {
            base_domain: lookup("BASE_DOMAIN").unwrap_or_else(|| "localhost".into()),
            timezone,
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_dir: lookup("LOG_DIR").filter(|d| !d.trim().is_empty()),
            event_channel_capacity,
            journal_capacity,
            environment: lookup("ENVIRONMENT").unwrap_or_else(|| "development".into()),
        })
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(base_domain: impl Into<String>, timezone: Tz) -> Self {
        Self {
            base_domain: base_domain.into(),
            timezone,
            log_level: "info".into(),
            log_dir: None,
            event_channel_capacity: DEFAULT_EVENT_CHANNEL_CAPACITY,
            journal_capacity: DEFAULT_JOURNAL_CAPACITY,
            environment: "development".into(),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

/// Positive integer from `key`, or `default` when unset
fn parse_capacity<F>(lookup: &F, key: &'static str, default: usize) -> Result<usize, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(v) => match v.parse::<usize>() {
            Ok(n) if n > 0 => Ok(n),
            _ => Err(ConfigError::InvalidValue { key, value: v }),
        },
        None => Ok(default),
    }
}
