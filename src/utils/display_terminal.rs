//! 터미널 출력 포맷팅 유틸리티
//!
//! 서버 시작 시 실행 구성 요약을 박스 형태로 출력합니다.

use crate::config::StoreBackend;
use crate::seed::SeedReport;

pub fn print_boxed_title(title: &str) {
    let content_width = 50;
    let border = "═".repeat(content_width);

    println!("╔{}╗", border);
    println!("║{:^50}║", title);
    println!("╚{}╝", border);
}

/// 시작 요약: 바인딩 주소, 저장소 백엔드, 피어 주소, 초기 데이터 적재 결과
pub fn print_startup_summary(
    bind_address: &str,
    backend: StoreBackend,
    peer_base_url: &str,
    seed: Option<&SeedReport>,
) {
    println!();
    print_boxed_title("👥 HUMAN RESOURCES BACKEND");
    println!("   🌐 Listening: http://{}", bind_address);
    println!("   💾 Store: {}", backend.as_str());
    println!("   📤 Peer: {}", peer_base_url);

    match seed {
        Some(report) => {
            println!("   🌱 Seed:");
            print_sub_task("countries", &seed_count(report.countries));
            print_sub_task("states", &seed_count(report.states));
            print_sub_task("cities", &seed_count(report.cities));
        }
        None => println!("   🌱 Seed: disabled"),
    }
    println!();
}

pub fn print_sub_task(name: &str, status: &str) {
    println!("   ├─ {}: {}", name, status);
}

fn seed_count(count: Option<usize>) -> String {
    match count {
        Some(n) => format!("{} items", n),
        None => "skipped".to_string(),
    }
}
