//! # Resilient Peer Client
//!
//! 새로 생성된 레코드를 다른 서비스로 전달하는 아웃바운드 클라이언트입니다.
//!
//! - 모든 TLS 인증서를 신뢰합니다 (자체 서명 인증서를 쓰는 내부 피어 대상).
//! - 연결/읽기 타임아웃과 리다이렉트 추적이 설정됩니다.
//! - 모든 요청에 고정 `Authorization` 헤더가 붙습니다.
//! - 네트워크 실패나 2xx 가 아닌 응답은 지수 백오프로 재시도합니다.
//! - 재시도를 모두 소진해도 호출자에게 에러를 올리지 않고 `T::default()` 를 반환합니다.
//!   호출자는 반환값을 확인하는 것 외에는 전달 성공 여부를 알 수 없습니다.
//! - 완료 상태(success / error / cancel)는 결과와 무관하게 항상 로그로 남습니다.
//!   future 가 도중에 drop 되면 cancel 입니다.
//!
//! ```rust,ignore
//! let client = PeerClient::new(PeerClientConfig::from_env())?;
//! let forwarded: EmployeeDto = client.post_employee(&employee).await;
//! ```

use std::fmt;
use std::sync::Mutex;

use log::{error, info, warn};
use reqwest::header::{ACCEPT, AUTHORIZATION};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::PeerClientConfig;
use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::EmployeeDto;

/// 피어 서비스의 직원 생성 경로
pub const EMPLOYEES_PATH: &str = "/api/employees";

/// 전송 완료 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Success,
    Error,
    Cancel,
}

impl fmt::Display for Completion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Completion::Success => "success",
            Completion::Error => "error",
            Completion::Cancel => "cancel",
        };
        f.write_str(label)
    }
}

/// drop 될 때 완료 상태를 기록합니다. 상태가 정해지지 않은 채 drop 되면 cancel 입니다.
struct CompletionLog<'a> {
    url: &'a str,
    outcome: Completion,
    last: &'a Mutex<Option<Completion>>,
}

impl<'a> CompletionLog<'a> {
    fn new(url: &'a str, last: &'a Mutex<Option<Completion>>) -> Self {
        Self { url, outcome: Completion::Cancel, last }
    }

    fn finish(&mut self, outcome: Completion) {
        self.outcome = outcome;
    }
}

impl Drop for CompletionLog<'_> {
    fn drop(&mut self) {
        info!("📤 피어 전송 종료 [{}]: {}", self.outcome, self.url);
        if let Ok(mut last) = self.last.lock() {
            *last = Some(self.outcome);
        }
    }
}

pub struct PeerClient {
    http: reqwest::Client,
    config: PeerClientConfig,
    last_completion: Mutex<Option<Completion>>,
}

impl PeerClient {
    pub fn new(config: PeerClientConfig) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .danger_accept_invalid_certs(true)
            .connect_timeout(config.connect_timeout)
            .read_timeout(config.read_timeout)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .map_err(|e| AppError::InternalError(format!("HTTP 클라이언트 생성 실패: {}", e)))?;

        Ok(Self { http, config, last_completion: Mutex::new(None) })
    }

    pub fn config(&self) -> &PeerClientConfig {
        &self.config
    }

    /// 가장 최근에 끝난 전송의 완료 상태. 아직 끝난 전송이 없으면 `None`.
    pub fn last_completion(&self) -> Option<Completion> {
        self.last_completion.lock().ok().and_then(|last| *last)
    }

    /// `payload` 를 JSON 으로 POST 하고 응답 본문을 `T` 로 반환합니다.
    ///
    /// 재시도를 모두 소진하면 `T::default()` 를 반환합니다.
    pub async fn post<T>(&self, path: &str, payload: &T) -> T
    where
        T: Serialize + DeserializeOwned + Default,
    {
        let url = self.config.url_for(path);
        let mut completion = CompletionLog::new(&url, &self.last_completion);
        let policy = &self.config.retry;
        let mut attempt = 0;

        loop {
            attempt += 1;

            match self.send_once(&url, payload).await {
                Ok(body) => {
                    completion.finish(Completion::Success);
                    return body;
                }
                Err(e) if attempt < policy.max_attempts => {
                    let delay = policy.delay_after(attempt);
                    warn!(
                        "⚠️ 피어 전송 실패 ({}/{}): {} - {:?} 후 재시도",
                        attempt, policy.max_attempts, e, delay
                    );
                    tokio::time::sleep(delay).await;
                }
                Err(e) => {
                    error!("❌ 피어 전송 포기 ({}회 시도): {} - {}", attempt, url, e);
                    completion.finish(Completion::Error);
                    return T::default();
                }
            }
        }
    }

    /// 직원을 피어 서비스의 [`EMPLOYEES_PATH`] 로 전달합니다.
    pub async fn post_employee(&self, employee: &EmployeeDto) -> EmployeeDto {
        self.post(EMPLOYEES_PATH, employee).await
    }

    async fn send_once<T>(&self, url: &str, payload: &T) -> AppResult<T>
    where
        T: Serialize + DeserializeOwned,
    {
        let response = self
            .http
            .post(url)
            .header(ACCEPT, "application/json")
            .header(AUTHORIZATION, &self.config.authorization)
            .json(payload)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("요청 실패: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalServiceError(format!("응답 {}: {}", status, body)));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("응답 파싱 실패: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RetryPolicy;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};
    use std::time::Duration;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};

    struct Peer {
        base_url: String,
        hits: Arc<AtomicUsize>,
        requests: Arc<Mutex<Vec<String>>>,
    }

    /// 요청 본문을 그대로 돌려주는 로컬 피어. `status` 가 200 이 아니면 `{}` 를 돌려줍니다.
    async fn spawn_peer(status: &'static str) -> Peer {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let hits = Arc::new(AtomicUsize::new(0));
        let requests = Arc::new(Mutex::new(Vec::new()));

        let (counter, log) = (Arc::clone(&hits), Arc::clone(&requests));
        tokio::spawn(async move {
            while let Ok((socket, _)) = listener.accept().await {
                counter.fetch_add(1, Ordering::SeqCst);
                let log = Arc::clone(&log);
                tokio::spawn(async move { respond(socket, status, log).await });
            }
        });

        Peer { base_url, hits, requests }
    }

    async fn respond(mut socket: TcpStream, status: &str, log: Arc<Mutex<Vec<String>>>) {
        let mut raw = Vec::new();
        let mut chunk = [0u8; 4096];

        let (head, body) = loop {
            let n = socket.read(&mut chunk).await.unwrap_or(0);
            if n == 0 {
                return;
            }
            raw.extend_from_slice(&chunk[..n]);

            let text = String::from_utf8_lossy(&raw).to_string();
            if let Some(end) = text.find("\r\n\r\n") {
                let head = text[..end].to_string();
                let length = head
                    .lines()
                    .find_map(|line| {
                        let (name, value) = line.split_once(':')?;
                        name.eq_ignore_ascii_case("content-length")
                            .then(|| value.trim().parse::<usize>().ok())
                            .flatten()
                    })
                    .unwrap_or(0);
                if raw.len() >= end + 4 + length {
                    let body = String::from_utf8_lossy(&raw[end + 4..end + 4 + length]).to_string();
                    break (head, body);
                }
            }
        };

        log.lock().unwrap().push(head);

        let reply = if status.starts_with("200") { body } else { "{}".to_string() };
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            reply.len(),
            reply
        );
        let _ = socket.write_all(response.as_bytes()).await;
        let _ = socket.shutdown().await;
    }

    fn client_for(base_url: &str, max_attempts: u32) -> PeerClient {
        let config = PeerClientConfig {
            base_url: base_url.to_string(),
            connect_timeout: Duration::from_secs(2),
            read_timeout: Duration::from_secs(2),
            retry: RetryPolicy::default()
                .with_max_attempts(max_attempts)
                .with_base_delay(Duration::from_millis(1))
                .with_max_delay(Duration::from_millis(5)),
            ..PeerClientConfig::default()
        };
        PeerClient::new(config).unwrap()
    }

    fn employee() -> EmployeeDto {
        EmployeeDto {
            id: Some("e1".to_string()),
            first_name: Some("Grace".to_string()),
            last_name: Some("Hopper".to_string()),
            email: Some("grace@example.com".to_string()),
            ..EmployeeDto::default()
        }
    }

    #[tokio::test]
    async fn test_successful_post_returns_peer_body() {
        let peer = spawn_peer("200 OK").await;
        let client = client_for(&peer.base_url, 10);

        let forwarded = client.post_employee(&employee()).await;

        assert_eq!(forwarded, employee());
        assert_eq!(peer.hits.load(Ordering::SeqCst), 1);
        assert_eq!(client.last_completion(), Some(Completion::Success));

        let requests = peer.requests.lock().unwrap();
        let head = requests[0].to_lowercase();
        assert!(head.starts_with("post /api/employees "));
        assert!(head.contains("authorization: basic my_password"));
        assert!(head.contains("accept: application/json"));
    }

    #[tokio::test]
    async fn test_always_failing_peer_returns_default_after_budget() {
        let peer = spawn_peer("500 Internal Server Error").await;
        let client = client_for(&peer.base_url, 10);

        let forwarded = client.post_employee(&employee()).await;

        assert_eq!(forwarded, EmployeeDto::default());
        assert_eq!(peer.hits.load(Ordering::SeqCst), 10);
        assert_eq!(client.last_completion(), Some(Completion::Error));
    }

    #[tokio::test]
    async fn test_unreachable_peer_returns_default() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        let client = client_for(&base_url, 3);
        assert_eq!(client.post_employee(&employee()).await, EmployeeDto::default());
    }

    #[tokio::test]
    async fn test_abandoned_post_is_logged_as_cancel() {
        let peer = spawn_peer("503 Service Unavailable").await;
        let config = PeerClientConfig {
            base_url: peer.base_url.clone(),
            retry: RetryPolicy::default().with_max_attempts(10).with_base_delay(Duration::from_secs(30)),
            ..PeerClientConfig::default()
        };
        let client = PeerClient::new(config).unwrap();
        assert_eq!(client.last_completion(), None);

        let abandoned = tokio::time::timeout(Duration::from_millis(500), client.post_employee(&employee())).await;

        assert!(abandoned.is_err());
        assert_eq!(peer.hits.load(Ordering::SeqCst), 1);
        assert_eq!(client.last_completion(), Some(Completion::Cancel));
    }

    #[tokio::test(start_paused = true)]
    async fn test_post_waits_for_backoff_between_attempts() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        let policy = RetryPolicy::default().with_max_attempts(4).with_base_delay(Duration::from_secs(2));
        let expected: Duration = (1..4).map(|attempt| policy.delay_after(attempt)).sum();
        assert_eq!(expected, Duration::from_secs(2 + 4 + 8));

        let client = PeerClient::new(PeerClientConfig {
            base_url,
            retry: policy,
            ..PeerClientConfig::default()
        })
        .unwrap();

        let started = tokio::time::Instant::now();
        assert_eq!(client.post_employee(&employee()).await, EmployeeDto::default());

        assert!(started.elapsed() >= expected);
        assert_eq!(client.last_completion(), Some(Completion::Error));
    }

    #[test]
    fn test_completion_labels() {
        assert_eq!(Completion::Success.to_string(), "success");
        assert_eq!(Completion::Error.to_string(), "error");
        assert_eq!(Completion::Cancel.to_string(), "cancel");
    }
}
