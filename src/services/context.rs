//! 服务层依赖注入
//!
//! 存储、时钟、ID 生成器与 Google 校验器都通过 [`ServiceContext`] 传入，
//! 测试可以替换为内存存储和固定时钟。

use std::sync::Arc;
use std::sync::atomic::{AtomicI64, AtomicU64, Ordering};

use chrono::{DateTime, FixedOffset, NaiveDate, SubsecRound, Utc};

use crate::config::{AppConfig, Argon2Config};
use crate::errors::Result;
use crate::storage::Storage;
use crate::utils::google_token::{GoogleTokenInfoVerifier, GoogleTokenVerifier};

/// 时钟
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    /// 计算业务日期所用的时区
    fn offset(&self) -> FixedOffset;

    /// 业务时区下的今天
    fn today(&self) -> NaiveDate {
        self.now().with_timezone(&self.offset()).date_naive()
    }
}

pub struct SystemClock {
    offset: FixedOffset,
}

impl SystemClock {
    pub fn new(offset: FixedOffset) -> Self {
        Self { offset }
    }
}

impl Clock for SystemClock {
    // 毫秒精度，与 SeaORM 存储的时间戳一致
    fn now(&self) -> DateTime<Utc> {
        Utc::now().trunc_subsecs(3)
    }

    fn offset(&self) -> FixedOffset {
        self.offset
    }
}

/// 可手动拨动的时钟，精度为毫秒
pub struct FixedClock {
    millis: AtomicI64,
    offset: FixedOffset,
}

impl FixedClock {
    pub fn new(now: DateTime<Utc>, offset: FixedOffset) -> Self {
        Self {
            millis: AtomicI64::new(now.timestamp_millis()),
            offset,
        }
    }

    pub fn set(&self, now: DateTime<Utc>) {
        self.millis.store(now.timestamp_millis(), Ordering::SeqCst);
    }

    pub fn advance(&self, delta: chrono::Duration) {
        self.millis
            .fetch_add(delta.num_milliseconds(), Ordering::SeqCst);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        DateTime::<Utc>::from_timestamp_millis(self.millis.load(Ordering::SeqCst))
            .unwrap_or_default()
    }

    fn offset(&self) -> FixedOffset {
        self.offset
    }
}

/// ID 生成器
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

/// 随机 UUID v4
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

/// 递增 ID，`{prefix}-{n}`
pub struct SequentialIds {
    prefix: String,
    counter: AtomicU64,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: AtomicU64::new(0),
        }
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        format!("{}-{}", self.prefix, n)
    }
}

/// 密码与重置令牌相关的参数
#[derive(Debug, Clone)]
pub struct AuthSettings {
    pub reset_token_ttl: chrono::Duration,
    /// 令牌以 `?token=` 追加在其后
    pub reset_link_base: String,
    pub argon2: Argon2Config,
}

impl AuthSettings {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            reset_token_ttl: chrono::Duration::minutes(config.auth.reset_token_expiry),
            reset_link_base: config.auth.reset_link_base.clone(),
            argon2: config.argon2.clone(),
        }
    }
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self {
            reset_token_ttl: chrono::Duration::minutes(60),
            reset_link_base: "http://localhost:3000/reset-password".to_string(),
            argon2: Argon2Config {
                memory_cost: 19456,
                time_cost: 2,
                parallelism: 1,
            },
        }
    }
}

/// 服务共享的协作者
#[derive(Clone)]
pub struct ServiceContext {
    pub storage: Arc<dyn Storage>,
    pub clock: Arc<dyn Clock>,
    pub ids: Arc<dyn IdGenerator>,
    pub google: Arc<dyn GoogleTokenVerifier>,
    pub auth: Arc<AuthSettings>,
}

impl ServiceContext {
    pub fn new(
        storage: Arc<dyn Storage>,
        clock: Arc<dyn Clock>,
        ids: Arc<dyn IdGenerator>,
        google: Arc<dyn GoogleTokenVerifier>,
    ) -> Self {
        Self {
            storage,
            clock,
            ids,
            google,
            auth: Arc::new(AuthSettings::default()),
        }
    }

    pub fn with_auth_settings(mut self, auth: AuthSettings) -> Self {
        self.auth = Arc::new(auth);
        self
    }

    /// 生产环境的协作者：系统时钟、UUID、Google tokeninfo
    pub fn from_config(storage: Arc<dyn Storage>, config: &AppConfig) -> Result<Self> {
        Ok(Self::new(
            storage,
            Arc::new(SystemClock::new(config.timezone())),
            Arc::new(UuidGenerator),
            Arc::new(GoogleTokenInfoVerifier::from_config(config)?),
        )
        .with_auth_settings(AuthSettings::from_config(config)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_fixed_clock_today_uses_offset() {
        // 2025-03-01 20:00 UTC 在 +05:30 已是 3 月 2 日
        let ist = FixedOffset::east_opt(330 * 60).unwrap();
        let clock = FixedClock::new(Utc.with_ymd_and_hms(2025, 3, 1, 20, 0, 0).unwrap(), ist);
        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2025, 3, 2).unwrap());

        clock.advance(chrono::Duration::hours(-4));
        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2025, 3, 1).unwrap());
    }

    #[test]
    fn test_system_clock_has_millisecond_precision() {
        let clock = SystemClock::new(FixedOffset::east_opt(0).unwrap());
        assert_eq!(clock.now().timestamp_subsec_nanos() % 1_000_000, 0);
    }

    #[test]
    fn test_sequential_ids() {
        let ids = SequentialIds::new("hw");
        assert_eq!(ids.next_id(), "hw-1");
        assert_eq!(ids.next_id(), "hw-2");
    }

    #[test]
    fn test_uuid_ids_are_unique() {
        let ids = UuidGenerator;
        assert_ne!(ids.next_id(), ids.next_id());
    }
}
