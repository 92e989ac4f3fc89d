//! Ordering of candidate icons.
//!
//! Both orderings are reproduced exactly as the service has always applied
//! them, including predicates that are not strict weak orders. They run on
//! [`stable_sort_by`], so they are deterministic and never panic.

pub mod stable;

use iconbatch_core::IconDescriptor;

pub use stable::stable_sort_by;

/// Display ordering: by width/height, then byte size, then URL.
///
/// Applied as three layered stable passes: URL ascending, byte size
/// ascending, then the width/height predicate (reversed when
/// `size_descending`).
pub fn sort_icons(icons: &mut [IconDescriptor], size_descending: bool) {
    stable_sort_by(icons, |a, b| a.url < b.url);
    stable_sort_by(icons, |a, b| a.bytes < b.bytes);

    if size_descending {
        stable_sort_by(icons, |a, b| width_height_less(b, a));
    } else {
        stable_sort_by(icons, width_height_less);
    }
}

// Not antisymmetric: 16x32 and 32x16 are each "less" than the other.
fn width_height_less(a: &IconDescriptor, b: &IconDescriptor) -> bool {
    a.width < b.width || a.height < b.height
}

/// Tie-break ordering used to pick one best icon; the best comes first.
pub fn sort_icons_by_custom(icons: &mut [IconDescriptor]) {
    stable_sort_by(icons, custom_less);
}

/// Lower format or shorter URL puts `a` first outright. Otherwise the
/// 32px-height rule applies, then smaller height. A worse format or longer
/// URL on `a` never puts `b` first by itself, so a 32px icon can still win.
fn custom_less(a: &IconDescriptor, b: &IconDescriptor) -> bool {
    if a.format < b.format {
        return true;
    }
    if a.url.len() < b.url.len() {
        return true;
    }
    if a.height == 32 {
        return true;
    }
    if b.height == 32 {
        return false;
    }
    a.height < b.height
}

/// The best of `icons` per [`sort_icons_by_custom`].
pub fn best_icon(mut icons: Vec<IconDescriptor>) -> Option<IconDescriptor> {
    sort_icons_by_custom(&mut icons);
    icons.into_iter().next()
}

#[cfg(test)]
mod tests {
    use super::*;
    use iconbatch_core::IconFormat;

    fn icon(url: &str, width: u32, height: u32, bytes: u64, format: IconFormat) -> IconDescriptor {
        IconDescriptor { url: url.to_string(), width, height, bytes, format }
    }

    fn urls(icons: &[IconDescriptor]) -> Vec<&str> {
        icons.iter().map(|i| i.url.as_str()).collect()
    }

    #[test]
    fn test_custom_format_beats_url_length() {
        let mut icons = vec![
            icon("aaaaaaaaaa", 16, 16, 0, IconFormat::Png),
            icon("bbbbbbbbbbbbbbb", 16, 16, 0, IconFormat::Ico),
        ];
        sort_icons_by_custom(&mut icons);
        assert_eq!(icons[0].format, IconFormat::Ico);
    }

    #[test]
    fn test_custom_url_length_beats_height_32() {
        let mut icons = vec![icon("a", 32, 32, 0, IconFormat::Png), icon("bb", 64, 64, 0, IconFormat::Png)];
        sort_icons_by_custom(&mut icons);
        assert_eq!(icons[0].url, "a");

        let mut reversed = vec![icon("bb", 64, 64, 0, IconFormat::Png), icon("a", 32, 32, 0, IconFormat::Png)];
        sort_icons_by_custom(&mut reversed);
        assert_eq!(reversed[0].url, "a");
    }

    #[test]
    fn test_custom_height_32_outranks_smaller_height() {
        let mut icons = vec![icon("/16.png", 16, 16, 0, IconFormat::Png), icon("/32.png", 32, 32, 0, IconFormat::Png)];
        sort_icons_by_custom(&mut icons);
        assert_eq!(icons[0].url, "/32.png");
    }

    #[test]
    fn test_custom_shorter_height_when_no_32() {
        let mut icons = vec![icon("/64.png", 64, 64, 0, IconFormat::Png), icon("/48.png", 48, 48, 0, IconFormat::Png)];
        sort_icons_by_custom(&mut icons);
        assert_eq!(urls(&icons), vec!["/48.png", "/64.png"]);
    }

    #[test]
    fn test_custom_height_32_outranks_better_format() {
        let mut icons = vec![icon("a", 16, 16, 0, IconFormat::Ico), icon("bbbb", 32, 32, 0, IconFormat::Png)];
        sort_icons_by_custom(&mut icons);
        assert_eq!(icons[0].url, "bbbb");
    }

    #[test]
    fn test_custom_shorter_url_outranks_better_format() {
        let mut icons = vec![icon("bbbb", 16, 16, 0, IconFormat::Ico), icon("a", 16, 16, 0, IconFormat::Png)];
        sort_icons_by_custom(&mut icons);
        assert_eq!(icons[0].url, "a");
        assert_eq!(best_icon(icons).unwrap().format, IconFormat::Png);
    }

    #[test]
    fn test_custom_format_order() {
        let mut icons = vec![
            icon("/i.svg", 0, 0, 0, IconFormat::Svg),
            icon("/i.png", 0, 0, 0, IconFormat::Png),
            icon("/i.gif", 0, 0, 0, IconFormat::Gif),
            icon("/i.ico", 0, 0, 0, IconFormat::Ico),
        ];
        sort_icons_by_custom(&mut icons);
        assert_eq!(urls(&icons), vec!["/i.ico", "/i.gif", "/i.png", "/i.svg"]);
    }

    #[test]
    fn test_custom_is_deterministic() {
        let input: Vec<IconDescriptor> = (0..45)
            .map(|i| {
                let format = [IconFormat::Png, IconFormat::Ico, IconFormat::Jpg][i % 3];
                icon(&"x".repeat(1 + i % 7), 16 * (i as u32 % 5), if i % 4 == 0 { 32 } else { i as u32 }, 0, format)
            })
            .collect();

        let mut first = input.clone();
        let mut second = input.clone();
        sort_icons_by_custom(&mut first);
        sort_icons_by_custom(&mut second);
        assert_eq!(first, second);
    }

    #[test]
    fn test_best_icon() {
        assert_eq!(best_icon(Vec::new()), None);

        let best = best_icon(vec![
            icon("http://e.com/apple-touch-icon.png", 180, 180, 9000, IconFormat::Png),
            icon("http://e.com/favicon.ico", 32, 32, 1000, IconFormat::Ico),
        ]);
        assert_eq!(best.unwrap().url, "http://e.com/favicon.ico");
    }

    #[test]
    fn test_sort_icons_ascending() {
        let mut icons = vec![
            icon("c", 64, 64, 10, IconFormat::Png),
            icon("a", 16, 16, 30, IconFormat::Png),
            icon("b", 32, 32, 20, IconFormat::Png),
        ];
        sort_icons(&mut icons, false);
        assert_eq!(urls(&icons), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_sort_icons_descending() {
        let mut icons = vec![
            icon("a", 16, 16, 30, IconFormat::Png),
            icon("c", 64, 64, 10, IconFormat::Png),
            icon("b", 32, 32, 20, IconFormat::Png),
        ];
        sort_icons(&mut icons, true);
        assert_eq!(urls(&icons), vec!["c", "b", "a"]);
    }

    #[test]
    fn test_sort_icons_same_size_falls_back_to_bytes_then_url() {
        let mut icons = vec![
            icon("z", 32, 32, 5, IconFormat::Png),
            icon("y", 32, 32, 1, IconFormat::Png),
            icon("x", 32, 32, 5, IconFormat::Png),
        ];
        sort_icons(&mut icons, false);
        assert_eq!(urls(&icons), vec!["y", "x", "z"]);
    }

    #[test]
    fn test_sort_icons_mixed_dimensions_kept_as_is() {
        // 16x32 and 32x16 each count as smaller than the other, so the
        // insertion pass swaps them.
        let mut icons = vec![icon("a", 16, 32, 0, IconFormat::Png), icon("b", 32, 16, 0, IconFormat::Png)];
        sort_icons(&mut icons, false);
        assert_eq!(urls(&icons), vec!["b", "a"]);
    }
}
