use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use pledger_store::JsonStore;
use pledger_store::models::PenaltyEvent;
use serde::Serialize;

/// Read-only aggregates over a user's own challenges. Witnessed challenges
/// are excluded from both views.
pub struct StatsService {
    store: Arc<JsonStore>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileStats {
    pub total_challenges: usize,
    pub active_challenges: usize,
    pub completed_challenges: usize,
    pub total_penalties: i64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyStats {
    pub weekly_count: usize,
    pub weekly_total_penalty: i64,
    pub daily_breakdown: Vec<DailyStats>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DailyStats {
    /// Calendar date, `YYYY-MM-DD`.
    pub date: String,
    pub count: usize,
    pub amount: i64,
}

impl StatsService {
    pub fn new(store: Arc<JsonStore>) -> Self {
        Self { store }
    }

    pub async fn profile(&self, user_id: &str) -> ProfileStats {
        self.store
            .read(|doc| {
                let owned: Vec<_> = doc
                    .challenges
                    .iter()
                    .filter(|c| c.user_id == user_id)
                    .collect();
                ProfileStats {
                    total_challenges: owned.len(),
                    active_challenges: owned.iter().filter(|c| c.progress < c.duration).count(),
                    completed_challenges: owned
                        .iter()
                        .filter(|c| c.progress >= c.duration)
                        .count(),
                    total_penalties: owned.iter().map(|c| c.total_penalty).sum(),
                }
            })
            .await
    }

    pub async fn weekly(&self, user_id: &str) -> WeeklyStats {
        // Cutoff computed once per request.
        let now = Utc::now();
        self.store
            .read(|doc| {
                let events: Vec<&PenaltyEvent> = doc
                    .penalties
                    .iter()
                    .filter(|p| {
                        doc.challenges
                            .iter()
                            .any(|c| c.id == p.challenge_id && c.user_id == user_id)
                    })
                    .collect();
                weekly_from_events(&events, now)
            })
            .await
    }
}

/// Window math, separated from store access. The trailing-week totals use a
/// `now - 7 days` cutoff; the daily buckets use calendar-date equality on the
/// parsed timestamps and cover the last seven days inclusive of today,
/// oldest first. The buckets scan all of the user's events, not the
/// pre-filtered weekly subset.
fn weekly_from_events(events: &[&PenaltyEvent], now: DateTime<Utc>) -> WeeklyStats {
    let cutoff = now - Duration::days(7);
    let weekly: Vec<_> = events.iter().filter(|p| p.date >= cutoff).collect();

    let daily_breakdown = (0..7)
        .rev()
        .map(|offset| {
            let day = (now - Duration::days(offset)).date_naive();
            let on_day: Vec<_> = events
                .iter()
                .filter(|p| p.date.date_naive() == day)
                .collect();
            DailyStats {
                date: day.format("%Y-%m-%d").to_string(),
                count: on_day.len(),
                amount: on_day.iter().map(|p| p.amount).sum(),
            }
        })
        .collect();

    WeeklyStats {
        weekly_count: weekly.len(),
        weekly_total_penalty: weekly.iter().map(|p| p.amount).sum(),
        daily_breakdown,
    }
}
