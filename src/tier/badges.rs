use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::Utc;
use thiserror::Error;
use tracing::{debug, info};
use uuid::Uuid;

use crate::core::explain::Locale;
use crate::models::{Badge, TierLevel};

/// Badge type under which tier awards are persisted
pub const TIER_BADGE_TYPE: &str = "tier";

/// Errors reported by the external badge store
#[derive(Debug, Error)]
pub enum BadgeStoreError {
    #[error("Badge store failure: {0}")]
    Backend(String),
}

/// Outbound persistence collaborator. The engine only decides what to
/// write; storage mechanics live behind this trait.
pub trait BadgeStore {
    fn get(&self, provider_id: &str, badge_type: &str) -> Result<Option<Badge>, BadgeStoreError>;
    fn put(&self, badge: Badge) -> Result<(), BadgeStoreError>;
}

/// What the synchronizer wants done with the badge record
#[derive(Debug, Clone)]
pub enum BadgeSyncDecision {
    NoChange,
    Create(Badge),
    Update(Badge),
}

/// Planned synchronization plus the upgrade signal for the notification
/// collaborator (which sees only "upgraded: yes/no" and the new tier,
/// never raw scores).
#[derive(Debug, Clone)]
pub struct SyncOutcome {
    pub decision: BadgeSyncDecision,
    pub tier: TierLevel,
    pub upgraded: bool,
}

/// Reconciles a computed tier against previously persisted badge state
#[derive(Debug, Clone, Default)]
pub struct BadgeSynchronizer {
    locale: Locale,
}

impl BadgeSynchronizer {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    /// Decide whether the badge record needs creating or updating.
    /// Pure: no I/O, deterministic apart from record id and timestamps.
    pub fn plan(
        &self,
        provider_id: &str,
        new_tier: TierLevel,
        existing: Option<&Badge>,
    ) -> SyncOutcome {
        match existing {
            None => {
                let badge = self.badge_for(provider_id, new_tier);
                SyncOutcome {
                    decision: BadgeSyncDecision::Create(badge),
                    tier: new_tier,
                    // First awards above the floor tier count as an upgrade
                    upgraded: new_tier > TierLevel::Bronze,
                }
            }
            Some(current) if current.tier == new_tier => SyncOutcome {
                decision: BadgeSyncDecision::NoChange,
                tier: new_tier,
                upgraded: false,
            },
            Some(current) => {
                let mut badge = self.badge_for(provider_id, new_tier);
                badge.id = current.id.clone();
                badge.awarded_at = current.awarded_at;
                SyncOutcome {
                    decision: BadgeSyncDecision::Update(badge),
                    tier: new_tier,
                    upgraded: new_tier > current.tier,
                }
            }
        }
    }

    /// Run the full read-plan-write cycle against a store while holding
    /// the per-provider lock, so two concurrent recomputations cannot
    /// race to write conflicting badge states.
    pub fn sync_with_store<S: BadgeStore>(
        &self,
        store: &S,
        locks: &ProviderLocks,
        provider_id: &str,
        new_tier: TierLevel,
    ) -> Result<SyncOutcome, BadgeStoreError> {
        let lock = locks.for_provider(provider_id);
        let _guard = lock.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

        let existing = store.get(provider_id, TIER_BADGE_TYPE)?;
        let outcome = self.plan(provider_id, new_tier, existing.as_ref());

        match &outcome.decision {
            BadgeSyncDecision::NoChange => {
                debug!(provider = provider_id, tier = ?new_tier, "badge already current");
            }
            BadgeSyncDecision::Create(badge) => {
                info!(provider = provider_id, tier = ?new_tier, "creating tier badge");
                store.put(badge.clone())?;
            }
            BadgeSyncDecision::Update(badge) => {
                info!(
                    provider = provider_id,
                    tier = ?new_tier,
                    upgraded = outcome.upgraded,
                    "updating tier badge"
                );
                store.put(badge.clone())?;
            }
        }

        Ok(outcome)
    }

    fn badge_for(&self, provider_id: &str, tier: TierLevel) -> Badge {
        let now = Utc::now();
        Badge {
            id: Uuid::new_v4().to_string(),
            provider_id: provider_id.to_string(),
            badge_type: TIER_BADGE_TYPE.to_string(),
            name: tier.display_name().to_string(),
            localized_name: tier.localized_name(self.locale).to_string(),
            icon: tier.icon().to_string(),
            color: tier.color().to_string(),
            tier,
            awarded_at: now,
            updated_at: now,
        }
    }
}

/// Per-provider locks serializing the badge read-modify-write
///
/// This is the only point in the engine needing a concurrency guarantee;
/// everything else is pure and freely parallel across providers.
#[derive(Debug, Default)]
pub struct ProviderLocks {
    locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl ProviderLocks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_provider(&self, provider_id: &str) -> Arc<Mutex<()>> {
        let mut locks = self
            .locks
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        locks
            .entry(provider_id.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }
}
