use std::io;

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info, warn};

use human_resources_backend::client::PeerClient;
use human_resources_backend::config::{
    DatabaseConfig, Environment, PeerClientConfig, RateLimitConfig, SeedConfig, ServerConfig, StoreBackend,
};
use human_resources_backend::core::state::{AppState, InMemoryStores};
use human_resources_backend::db::Database;
use human_resources_backend::routes::configure_all_routes;
use human_resources_backend::seed::seed_reference_data;
use human_resources_backend::utils::display_terminal::print_startup_summary;

#[actix_web::main]
async fn main() -> io::Result<()> {
    load_env_file();
    init_logging();

    info!("🚀 인사 참조 데이터 서비스 시작중... ({:?})", Environment::current());

    let peer_config = PeerClientConfig::from_env();
    let peer_base_url = peer_config.base_url.clone();
    let peer_client = PeerClient::new(peer_config).map_err(|e| {
        error!("❌ 피어 클라이언트 생성 실패: {}", e);
        io::Error::other(e.to_string())
    })?;

    let state = initialize_state(peer_client).await?;

    let seed = match SeedConfig::data_dir() {
        Some(dir) => Some(seed_reference_data(&state, &dir).await.map_err(|e| {
            error!("❌ 초기 데이터 적재 실패: {}", e);
            io::Error::other(e.to_string())
        })?),
        None => None,
    };

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    let bind_address = ServerConfig::bind_address();
    print_startup_summary(&bind_address, state.backend, &peer_base_url, seed.as_ref());

    start_http_server(web::Data::new(state), &bind_address).await
}

async fn initialize_state(peer_client: PeerClient) -> io::Result<AppState> {
    match DatabaseConfig::backend() {
        StoreBackend::MongoDb => {
            info!("📡 데이터베이스 연결 중...");

            let database = Database::new().await.map_err(|e| {
                error!("❌ 데이터베이스 연결 실패: {}", e);
                io::Error::other(e.to_string())
            })?;

            Ok(AppState::build(&database, peer_client))
        }
        StoreBackend::Memory => {
            warn!("⚠️ 인메모리 저장소 사용: 재시작하면 데이터가 사라집니다");
            Ok(AppState::build(&InMemoryStores, peer_client))
        }
    }
}

async fn start_http_server(state: web::Data<AppState>, bind_address: &str) -> io::Result<()> {
    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    let rate_limit_config = RateLimitConfig::load();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| io::Error::other("Rate Limiting 설정이 올바르지 않습니다"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    HttpServer::new(move || {
        let cors = configure_cors();

        App::new()
            .app_data(state.clone())
            .wrap(Governor::new(&governor_conf))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_all_routes)
    })
    .bind(bind_address)?
    .workers(ServerConfig::workers())
    .run()
    .await
}

fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::CACHE_CONTROL,
        ])
        .max_age(3600)
}
