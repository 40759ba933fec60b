//! Request-to-file resolution.
//!
//! The resolver turns a raw request into a `(status, path)` pair. The
//! decision order is fixed and short-circuits at the first match:
//!
//! 1. Method not GET/HEAD → 405
//! 2. Normalized target contains a traversal pattern → 403
//! 3. Target absent under the website root → 404
//! 4. Otherwise → 200 with the resolved path
//!
//! Every error status is backed by an error page that is guaranteed to
//! exist: first `<website-root>/NNN.html`, falling back to the system-wide
//! page under the fallback root. [`Resolver::verify`] checks at startup
//! that this guarantee can be met, so a missing page is an operator error
//! surfaced before the first request.

pub mod security;

use crate::http::parser;
use crate::http::request::{Method, RawRequest};
use crate::http::status::StatusCode;
use anyhow::bail;
use std::path::PathBuf;

/// System-wide directory holding the fallback error pages.
pub const FALLBACK_SITE_DIR: &str = "/etc/cyllene/website";

/// The final decision for one request: status code plus the filesystem
/// path whose bytes make up the response body. Produced exactly once per
/// request and immutable afterwards; the path is guaranteed to exist when
/// the resolver's startup verification has passed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTarget {
    pub status: StatusCode,
    pub path: PathBuf,
}

pub struct Resolver {
    website_root: PathBuf,
    fallback_root: PathBuf,
}

impl Resolver {
    pub fn new(website_root: impl Into<PathBuf>, fallback_root: impl Into<PathBuf>) -> Self {
        Self {
            website_root: website_root.into(),
            fallback_root: fallback_root.into(),
        }
    }

    /// Startup check: the website root must exist, and each of the three
    /// error pages must resolve to an existing file in either the website
    /// root or the fallback directory. Run once before accepting
    /// connections so misconfiguration is fatal at startup rather than
    /// discovered mid-request.
    pub fn verify(&self) -> anyhow::Result<()> {
        if !self.website_root.exists() {
            bail!(
                "website root not found: {}",
                self.website_root.display()
            );
        }

        for status in [
            StatusCode::Forbidden,
            StatusCode::NotFound,
            StatusCode::MethodNotAllowed,
        ] {
            let page = self.error_page(status);
            if !page.path.exists() {
                bail!(
                    "error page {} not found in {} or {}",
                    status.error_page().unwrap_or_default(),
                    self.website_root.display(),
                    self.fallback_root.display()
                );
            }
        }

        Ok(())
    }

    /// Resolves a raw request to its status code and target file.
    pub fn resolve(&self, raw: &RawRequest) -> ResolvedTarget {
        match parser::extract_method(raw.as_bytes()) {
            Method::Get | Method::Head => {}
            Method::Unsupported => return self.error_page(StatusCode::MethodNotAllowed),
        }

        // A target that cannot be isolated (trailing slash, empty, not
        // UTF-8) always resolves as 404, never 400.
        let Ok(target) = parser::isolate_target(raw.as_bytes()) else {
            return self.error_page(StatusCode::NotFound);
        };

        let normalized = security::normalize(target);
        if security::contains_traversal(&normalized) {
            return self.error_page(StatusCode::Forbidden);
        }

        let path = self.join_root(&normalized);
        if !path.exists() {
            return self.error_page(StatusCode::NotFound);
        }

        ResolvedTarget {
            status: StatusCode::Ok,
            path,
        }
    }

    /// Two-tier error page resolution: prefer the custom page under the
    /// website root, fall back to the system-wide one. The returned path
    /// may still be absent if both are missing; `verify` rules that out
    /// at startup.
    fn error_page(&self, status: StatusCode) -> ResolvedTarget {
        let name = match status.error_page() {
            Some(name) => name,
            None => unreachable!("error_page called for a success status"),
        };

        let custom = self.website_root.join(name);
        let path = if custom.exists() {
            custom
        } else {
            self.fallback_root.join(name)
        };

        ResolvedTarget { status, path }
    }

    /// Joins the normalized target under the website root. The target may
    /// or may not carry a leading slash depending on the method's token
    /// width, so the seam is normalized again after joining.
    fn join_root(&self, normalized_target: &str) -> PathBuf {
        let joined = format!(
            "{}/{}",
            self.website_root.to_string_lossy(),
            normalized_target
        );
        PathBuf::from(security::normalize(&joined))
    }
}
