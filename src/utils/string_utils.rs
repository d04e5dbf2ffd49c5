//! 문자열 처리 유틸리티

/// 선택적 문자열 필드 정리
///
/// `None` 이거나 빈 문자열/공백만 있는 경우 `None` 을,
/// 그렇지 않으면 앞뒤 공백을 제거한 값을 반환합니다.
///
/// # 예제
///
/// ```rust,ignore
/// assert_eq!(clean_optional_string(Some("  ".to_string())), None);
/// assert_eq!(clean_optional_string(Some(" 64b7 ".to_string())), Some("64b7".to_string()));
/// ```
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}
