//! # Pseudo-Stream Projection
//!
//! 유한한 조회 결과를 "실시간" 피드처럼 보이게 만드는 투영입니다.
//! 각 항목은 주기마다 한 번씩 자신을 다시 내보내는 무한 스트림이 되고,
//! 모든 항목 스트림은 동시에 병합됩니다.
//!
//! - 첫 방출은 한 주기 후입니다.
//! - 소비자가 늦어 놓친 주기는 몰아서 내보내지 않고, 그 시점부터 다시 한 주기씩 셉니다.
//! - 레코드 사이의 순서는 보장하지 않습니다.
//! - 원본 스트림의 에러는 한 번만 전달되고 반복되지 않습니다.
//! - 결과가 하나라도 있으면 스스로 끝나지 않습니다. 소비자가 스트림을 drop 하면
//!   모든 타이머가 함께 정리됩니다.
//! - 원본이 비어 있으면 즉시 끝납니다.

use std::time::Duration;

use futures_util::stream::BoxStream;
use futures_util::{future, stream, StreamExt};
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tokio_stream::wrappers::IntervalStream;

use crate::core::errors::AppResult;

/// 재방출 주기
pub const REPEAT_PERIOD: Duration = Duration::from_secs(2);

/// `source` 의 각 항목을 `period` 마다 다시 내보내는 스트림으로 바꿉니다.
pub fn repeat_every<T>(
    source: BoxStream<'static, AppResult<T>>,
    period: Duration,
) -> BoxStream<'static, AppResult<T>>
where
    T: Clone + Send + 'static,
{
    source
        .map(move |item| match item {
            Ok(value) => {
                let mut ticks = interval_at(Instant::now() + period, period);
                ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);
                IntervalStream::new(ticks).map(move |_| Ok(value.clone())).boxed()
            }
            Err(error) => stream::once(future::ready(Err(error))).boxed(),
        })
        .flatten_unordered(None)
        .boxed()
}
