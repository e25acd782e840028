//! 수집 통계 구조체.

use std::time::Duration;

/// 시장별 수집 통계
#[derive(Debug, Clone, Default)]
pub struct CollectionStats {
    /// 조회한 종목 수
    pub total: usize,
    /// 종목명 조회 성공 횟수
    pub success: usize,
    /// 종목명 조회 실패 횟수
    pub errors: usize,
    /// 소요 시간
    pub elapsed: Duration,
}

impl CollectionStats {
    /// 새 통계 객체 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 성공률 계산 (%)
    pub fn success_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            (self.success as f64 / self.total as f64) * 100.0
        }
    }

    /// 통계 요약 로그 출력
    pub fn log_summary(&self, operation: &str) {
        tracing::info!(
            operation = operation,
            total = self.total,
            success = self.success,
            errors = self.errors,
            success_rate = format!("{:.1}%", self.success_rate()),
            elapsed = format!("{:.1}s", self.elapsed.as_secs_f64()),
            "수집 완료"
        );
    }
}
