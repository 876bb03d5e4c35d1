use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use chrono::{DateTime, Duration, TimeZone, Utc};
use leptos::*;
use serde::{Deserialize, Serialize};

use crate::{api::EmployeeCategory, utils::storage};

/// Lifetime assumed for tokens that do not carry an `exp` claim.
pub const DEFAULT_SESSION_TTL_HOURS: i64 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "category")]
pub enum SessionRole {
    Admin,
    Employee(EmployeeCategory),
}

impl SessionRole {
    fn storage_key(self) -> &'static str {
        match self {
            SessionRole::Admin => "gesang.session.admin",
            SessionRole::Employee(EmployeeCategory::Regular) => "gesang.session.regular",
            SessionRole::Employee(EmployeeCategory::Khusus) => "gesang.session.khusus",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub role: SessionRole,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    pub fn from_token(token: impl Into<String>, role: SessionRole, now: DateTime<Utc>) -> Self {
        let token = token.into();
        let expires_at =
            jwt_expiry(&token).unwrap_or_else(|| now + Duration::hours(DEFAULT_SESSION_TTL_HOURS));
        Self {
            token,
            role,
            issued_at: now,
            expires_at,
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

/// Reads the `exp` claim of a JWT without verifying it. Verification is the
/// backend's job; the client only needs to know when to stop using the token.
fn jwt_expiry(token: &str) -> Option<DateTime<Utc>> {
    let payload = token.split('.').nth(1)?;
    let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')).ok()?;
    let claims: serde_json::Value = serde_json::from_slice(&bytes).ok()?;
    let exp = claims.get("exp")?.as_i64()?;
    Utc.timestamp_opt(exp, 0).single()
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionSlots {
    admin: Option<Session>,
    regular: Option<Session>,
    khusus: Option<Session>,
}

impl SessionSlots {
    fn slot(&self, role: SessionRole) -> &Option<Session> {
        match role {
            SessionRole::Admin => &self.admin,
            SessionRole::Employee(EmployeeCategory::Regular) => &self.regular,
            SessionRole::Employee(EmployeeCategory::Khusus) => &self.khusus,
        }
    }

    fn slot_mut(&mut self, role: SessionRole) -> &mut Option<Session> {
        match role {
            SessionRole::Admin => &mut self.admin,
            SessionRole::Employee(EmployeeCategory::Regular) => &mut self.regular,
            SessionRole::Employee(EmployeeCategory::Khusus) => &mut self.khusus,
        }
    }

    pub fn active(&self, role: SessionRole, now: DateTime<Utc>) -> Option<Session> {
        self.slot(role)
            .as_ref()
            .filter(|session| !session.is_expired(now))
            .cloned()
    }

    pub fn set(&mut self, session: Session) {
        let role = session.role;
        *self.slot_mut(role) = Some(session);
    }

    pub fn clear(&mut self, role: SessionRole) {
        *self.slot_mut(role) = None;
    }
}

/// Session context shared with the screens that call authenticated
/// endpoints. Sessions survive a reload through `sessionStorage`, so they end
/// with the browser session.
#[derive(Clone, Copy)]
pub struct SessionContext {
    slots: RwSignal<SessionSlots>,
}

impl SessionContext {
    pub fn new(initial: SessionSlots) -> Self {
        Self {
            slots: create_rw_signal(initial),
        }
    }

    pub fn restore() -> Self {
        let mut slots = SessionSlots::default();
        for role in [
            SessionRole::Admin,
            SessionRole::Employee(EmployeeCategory::Regular),
            SessionRole::Employee(EmployeeCategory::Khusus),
        ] {
            if let Some(session) = load_persisted(role) {
                slots.set(session);
            }
        }
        Self::new(slots)
    }

    /// Active session for `role`; expired sessions read as absent.
    pub fn current(&self, role: SessionRole) -> Option<Session> {
        self.slots.with(|slots| slots.active(role, Utc::now()))
    }

    pub fn current_untracked(&self, role: SessionRole) -> Option<Session> {
        self.slots
            .with_untracked(|slots| slots.active(role, Utc::now()))
    }

    pub fn sign_in(&self, session: Session) {
        persist(&session);
        self.slots.update(|slots| slots.set(session));
    }

    pub fn sign_out(&self, role: SessionRole) {
        forget(role);
        self.slots.update(|slots| slots.clear(role));
    }
}

fn load_persisted(role: SessionRole) -> Option<Session> {
    let storage = storage::session_storage().ok()?;
    let raw = storage.get_item(role.storage_key()).ok().flatten()?;
    match serde_json::from_str::<Session>(&raw) {
        Ok(session) if !session.is_expired(Utc::now()) => Some(session),
        Ok(_) => {
            log::info!("discarding expired {:?} session", role);
            let _ = storage.remove_item(role.storage_key());
            None
        }
        Err(err) => {
            log::warn!("discarding unreadable {:?} session: {}", role, err);
            let _ = storage.remove_item(role.storage_key());
            None
        }
    }
}

fn persist(session: &Session) {
    let Ok(storage) = storage::session_storage() else {
        return;
    };
    match serde_json::to_string(session) {
        Ok(raw) => {
            if storage.set_item(session.role.storage_key(), &raw).is_err() {
                log::warn!("failed to persist {:?} session", session.role);
            }
        }
        Err(err) => log::warn!("failed to encode session: {}", err),
    }
}

fn forget(role: SessionRole) {
    if let Ok(storage) = storage::session_storage() {
        let _ = storage.remove_item(role.storage_key());
    }
}

#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    provide_context(SessionContext::restore());
    view! { <>{children()}</> }
}

pub fn use_session() -> SessionContext {
    match use_context::<SessionContext>() {
        Some(ctx) => ctx,
        None => {
            let ctx = SessionContext::new(SessionSlots::default());
            provide_context(ctx);
            ctx
        }
    }
}
