//! Helpers for constructing asset and API URLs that respect the deployment base path.

/// When `PUBLIC_URL` is set at compile time (e.g., `/app` when hosted under a
/// subdirectory), generated URLs are prefixed accordingly. Local builds
/// without `PUBLIC_URL` fall back to root-anchored paths.
#[must_use]
pub fn asset_path(relative: &str) -> String {
    path_with_base(relative, option_env!("PUBLIC_URL").unwrap_or(""))
}

/// API endpoint URL. `API_BASE` (compile time) points requests at a service
/// on another origin; unset means same-origin, which matches the service
/// serving its own static bundle.
#[must_use]
pub fn api_path(relative: &str) -> String {
    path_with_base(relative, option_env!("API_BASE").unwrap_or(""))
}

/// Base path for the router (e.g., `/app` when hosted under a subdirectory).
///
/// Returns `None` when no base path is configured so the router falls back to root.
#[must_use]
pub fn router_base() -> Option<String> {
    let base = option_env!("PUBLIC_URL").unwrap_or("").trim_end_matches('/');
    if base.is_empty() {
        None
    } else {
        Some(base.to_string())
    }
}

/// Icon location for a character, keyed by the asset tree's naming scheme:
/// lowercased name with spaces replaced by underscores.
#[must_use]
pub fn character_icon(name: &str) -> String {
    let slug = name.trim().to_lowercase().replace(' ', "_");
    asset_path(&format!("assets/images/characters/{slug}/icon-big.png"))
}

fn path_with_base(relative: &str, base: &str) -> String {
    let base = base.trim_end_matches('/');
    let rel = relative.trim_start_matches('/');

    if base.is_empty() {
        format!("/{rel}")
    } else {
        format!("{base}/{rel}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_root_prefixed_path_when_base_missing() {
        assert_eq!(
            path_with_base("assets/img/logo.png", ""),
            "/assets/img/logo.png"
        );
        assert_eq!(
            path_with_base("/assets/img/logo.png", ""),
            "/assets/img/logo.png"
        );
    }

    #[test]
    fn builds_paths_with_public_base() {
        assert_eq!(
            path_with_base("assets/img/logo.png", "/app/"),
            "/app/assets/img/logo.png"
        );
    }

    #[test]
    fn icon_path_slugifies_names() {
        assert_eq!(
            character_icon("Kuki Shinobu"),
            "/assets/images/characters/kuki_shinobu/icon-big.png"
        );
        assert_eq!(
            character_icon("Bennett"),
            "/assets/images/characters/bennett/icon-big.png"
        );
    }
}
