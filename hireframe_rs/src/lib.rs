//! # hireframe
//!
//! Core library for the Hireframe site: the onboarding wizard state machine,
//! the typed session layer, and the service client for the hosted Xano
//! backend.
//!
//! The [`site`](https://github.com/hireframe/hireframe) crate renders the
//! marketing pages and the wizard UI; everything with semantics lives here so
//! it can be exercised on a native target without a browser.
//!
//! ## Quick Start (Library Usage)
//!
//! ```rust
//! use hireframe::wizard::{SectionPatch, Step, Wizard};
//! use hireframe::wizard::form::OrganizationPatch;
//!
//! let mut wizard = Wizard::new();
//! assert_eq!(wizard.current(), Step::OrgBasicInfo);
//!
//! wizard.update_section(SectionPatch::Organization(OrganizationPatch {
//!     name: Some("Acme Robotics".into()),
//!     industry: Some("Robotics".into()),
//!     size: Some("11-50".into()),
//!     ..Default::default()
//! }));
//!
//! wizard.try_advance().expect("basic info is complete");
//! assert_eq!(wizard.current(), Step::OrgFinancial);
//! ```
//!
//! ## Talking to the backend
//!
//! ```rust,no_run
//! use hireframe::api::ApiClient;
//! use hireframe::config::ApiConfig;
//! use hireframe::model::NewOrganization;
//!
//! # async fn demo() -> Result<(), hireframe::error::ApiError> {
//! let client = ApiClient::new(ApiConfig::default());
//! client.set_token(Some("jwt-from-login".into()));
//!
//! let org = client
//!     .create_organization(&NewOrganization { name: "Acme Robotics".into(), ..Default::default() })
//!     .await?;
//! println!("created organization #{}", org.id);
//! # Ok(())
//! # }
//! ```

/// Service layer: per-resource wrappers over the Xano HTTP API.
///
/// All calls normalize errors to [`error::ApiError`]: remote messages are
/// surfaced verbatim, unusable bodies fall back to a per-resource message,
/// and transport failures collapse to a single generic message.
pub mod api;

/// Backend endpoint configuration.
pub mod config;

/// Error types shared across the crate.
pub mod error;

/// Wire-format records for organizations, teams, job posts, users, and roles.
pub mod model;

/// Typed session object over a key-value store (browser localStorage in the
/// site crate, in-memory elsewhere).
pub mod session;

/// The onboarding wizard: step state machine, form aggregate, validation.
pub mod wizard;
