use crate::models::AssetCategory;

/// Directory under which every doodlebot asset category is nested.
pub const ASSETS_BASE_PATH: &str = "build-a-doodlebot";

/// Produce the relative path handed to the resolver for an asset.
///
/// The path always uses forward slashes so the same manifest resolves identically on
/// every platform, regardless of how an id was spelled at the call site.
pub fn make_asset_path(category: AssetCategory, id: &str) -> String {
    format!("{}/{}/{}", ASSETS_BASE_PATH, category.dir_name(), id).replace('\\', "/")
}

/// Join a base prefix and a relative path with exactly one separator.
///
/// An empty base returns the relative path untouched.
pub fn join_url(base: &str, relative: &str) -> String {
    let relative = relative.replace('\\', "/");
    if base.is_empty() {
        return relative;
    }

    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        relative.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nests_ids_under_base_and_category() {
        assert_eq!(
            make_asset_path(AssetCategory::Image, "layers/PenLayer.png"),
            "build-a-doodlebot/images/layers/PenLayer.png"
        );
        assert_eq!(
            make_asset_path(AssetCategory::Sound, "pen.mp3"),
            "build-a-doodlebot/sounds/pen.mp3"
        );
    }

    #[test]
    fn normalises_backslashes_from_windows_inputs() {
        let result = make_asset_path(AssetCategory::Video, "clips\\intro.mp4");
        assert_eq!(result, "build-a-doodlebot/videos/clips/intro.mp4");
    }

    #[test]
    fn joins_with_a_single_separator() {
        assert_eq!(join_url("/static/", "/a/b.png"), "/static/a/b.png");
        assert_eq!(join_url("https://cdn.test", "a/b.png"), "https://cdn.test/a/b.png");
        assert_eq!(join_url("", "a\\b.png"), "a/b.png");
    }
}
