//! 피어 서비스 전송 클라이언트 설정
//!
//! 새로 생성된 레코드를 다른 서비스로 전달하는 아웃바운드 클라이언트의
//! 대상 주소, 고정 자격 증명, 타임아웃, 재시도 정책을 환경 변수에서 읽습니다.
//!
//! ## 환경 변수
//!
//! ```bash
//! export PEER_BASE_URL="http://localhost:8080"
//! export PEER_AUTHORIZATION="Basic MY_PASSWORD"
//! export PEER_CONNECT_TIMEOUT_SECS="120"
//! export PEER_READ_TIMEOUT_SECS="120"
//! export PEER_MAX_ATTEMPTS="10"
//! export PEER_BACKOFF_BASE_MS="2000"
//! ```

use std::env;
use std::str::FromStr;
use std::time::Duration;

/// 재시도 정책
///
/// `attempt` 번째 실패 후 대기 시간은 `base_delay * 2^(attempt - 1)` 이며
/// `max_delay` 를 넘지 않습니다. 지터는 없습니다.
#[derive(Debug, Clone, PartialEq)]
pub struct RetryPolicy {
    /// 첫 시도를 포함한 최대 시도 횟수
    pub max_attempts: u32,
    /// 첫 번째 재시도 전 대기 시간
    pub base_delay: Duration,
    /// 대기 시간 상한
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 10,
            base_delay: Duration::from_secs(2),
            max_delay: Duration::from_secs(600),
        }
    }
}

impl RetryPolicy {
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    pub fn with_base_delay(mut self, base_delay: Duration) -> Self {
        self.base_delay = base_delay;
        self
    }

    pub fn with_max_delay(mut self, max_delay: Duration) -> Self {
        self.max_delay = max_delay;
        self
    }

    /// `attempt` (1부터 시작) 번째 실패 후 다음 시도까지의 대기 시간
    pub fn delay_after(&self, attempt: u32) -> Duration {
        let exponent = attempt.saturating_sub(1).min(31);
        self.base_delay
            .checked_mul(1u32 << exponent)
            .unwrap_or(self.max_delay)
            .min(self.max_delay)
    }
}

/// 아웃바운드 클라이언트 설정
#[derive(Debug, Clone)]
pub struct PeerClientConfig {
    /// 피어 서비스 기본 URL (끝의 `/` 제외)
    pub base_url: String,
    /// 모든 요청에 붙는 고정 `Authorization` 헤더 값
    pub authorization: String,
    pub connect_timeout: Duration,
    pub read_timeout: Duration,
    pub retry: RetryPolicy,
}

impl Default for PeerClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            authorization: "Basic MY_PASSWORD".to_string(),
            connect_timeout: Duration::from_secs(120),
            read_timeout: Duration::from_secs(120),
            retry: RetryPolicy::default(),
        }
    }
}

impl PeerClientConfig {
    /// 환경 변수에서 설정을 읽고, 없거나 잘못된 값은 기본값을 사용합니다.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let base_url = env::var("PEER_BASE_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or(defaults.base_url);
        let authorization = env::var("PEER_AUTHORIZATION").unwrap_or(defaults.authorization);

        let retry = RetryPolicy::default()
            .with_max_attempts(parse_env("PEER_MAX_ATTEMPTS", defaults.retry.max_attempts))
            .with_base_delay(Duration::from_millis(parse_env(
                "PEER_BACKOFF_BASE_MS",
                defaults.retry.base_delay.as_millis() as u64,
            )));

        Self {
            base_url,
            authorization,
            connect_timeout: Duration::from_secs(parse_env(
                "PEER_CONNECT_TIMEOUT_SECS",
                defaults.connect_timeout.as_secs(),
            )),
            read_timeout: Duration::from_secs(parse_env(
                "PEER_READ_TIMEOUT_SECS",
                defaults.read_timeout.as_secs(),
            )),
            retry,
        }
    }

    /// 기본 URL 뒤에 경로를 붙입니다.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path.trim_start_matches('/'))
    }
}

fn parse_env<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_retry_policy() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.max_attempts, 10);
        assert_eq!(policy.base_delay, Duration::from_secs(2));
    }

    #[test]
    fn test_backoff_doubles_from_base() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.delay_after(1), Duration::from_secs(2));
        assert_eq!(policy.delay_after(2), Duration::from_secs(4));
        assert_eq!(policy.delay_after(3), Duration::from_secs(8));
        assert_eq!(policy.delay_after(9), Duration::from_secs(512));
    }

    #[test]
    fn test_backoff_is_capped() {
        let policy = RetryPolicy::default().with_max_delay(Duration::from_secs(5));
        assert_eq!(policy.delay_after(3), Duration::from_secs(5));
        assert_eq!(policy.delay_after(40), Duration::from_secs(5));
    }

    #[test]
    fn test_max_attempts_never_zero() {
        assert_eq!(RetryPolicy::default().with_max_attempts(0).max_attempts, 1);
    }

    #[test]
    fn test_url_for_joins_single_slash() {
        let config = PeerClientConfig {
            base_url: "https://peer.internal/".to_string(),
            ..PeerClientConfig::default()
        };
        assert_eq!(config.url_for("/api/employees"), "https://peer.internal/api/employees");
        assert_eq!(config.url_for("api/employees"), "https://peer.internal/api/employees");
    }
}
