//! Display names and anchors derived from file and section names.
//!
//! ## Elision
//!
//! Long file names are shortened for display by cutting the middle of the
//! stem and keeping the extension, so a name still reads as what it is:
//!
//! ```text
//! 2023-11-04 Interview with the composer about the new album.mp3
//!   → 2023-11-04 Interview wi…he new album.mp3      (budget 40)
//! ```
//!
//! All lengths are counted in characters, not bytes.
//!
//! ## Slugs
//!
//! Section titles become anchor ids: alphanumerics are lowercased, every
//! other character turns into a dash, dash runs collapse and edge dashes are
//! trimmed. `"Music & Talk!"` → `music-talk`.

const ELLIPSIS: char = '…';

/// Share of the remaining stem budget given to the head, in percent.
const HEAD_SHARE: usize = 66;

/// Split a file name into stem and extension (with its dot).
///
/// Leading dots never start an extension: `.mp3` has no extension, and
/// `..hidden.mp3` splits as `..hidden` + `.mp3`.
pub fn split_extension(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(idx) if name[..idx].chars().any(|c| c != '.') => name.split_at(idx),
        _ => (name, ""),
    }
}

/// Shorten `name` to at most `max_chars` characters, keeping the extension.
///
/// A budget of `0` disables elision. When the budget cannot even hold the
/// extension plus the ellipsis, the name is hard-cut to `max_chars - 1`
/// characters plus the ellipsis.
pub fn elide_file_name(name: &str, max_chars: usize) -> String {
    let len = name.chars().count();
    if max_chars == 0 || len <= max_chars {
        return name.to_string();
    }

    let (stem, ext) = split_extension(name);
    let reserve = ext.chars().count() + 1;
    if max_chars <= reserve {
        let keep = max_chars - 1;
        let mut cut: String = name.chars().take(keep).collect();
        cut.push(ELLIPSIS);
        return cut;
    }

    let avail = max_chars - reserve;
    let head = (avail * HEAD_SHARE / 100).max(1);
    let tail = avail.saturating_sub(head);

    let stem_len = stem.chars().count();
    let mut out: String = stem.chars().take(head).collect();
    out.push(ELLIPSIS);
    out.extend(stem.chars().skip(stem_len.saturating_sub(tail)));
    out.push_str(ext);
    out
}

/// Anchor id for a section title. Never empty: falls back to `section`.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    for c in title.chars() {
        if c.is_alphanumeric() {
            slug.extend(c.to_lowercase());
        } else if !slug.ends_with('-') {
            slug.push('-');
        }
    }
    let trimmed = slug.trim_matches('-');
    if trimmed.is_empty() {
        "section".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // split_extension
    // =========================================================================

    #[test]
    fn split_simple() {
        assert_eq!(split_extension("song.mp3"), ("song", ".mp3"));
    }

    #[test]
    fn split_uses_last_dot() {
        assert_eq!(split_extension("a.b.flac"), ("a.b", ".flac"));
    }

    #[test]
    fn split_no_extension() {
        assert_eq!(split_extension("README"), ("README", ""));
    }

    #[test]
    fn split_leading_dot_is_not_extension() {
        assert_eq!(split_extension(".mp3"), (".mp3", ""));
        assert_eq!(split_extension("..hidden.mp3"), ("..hidden", ".mp3"));
    }

    // =========================================================================
    // elide_file_name
    // =========================================================================

    #[test]
    fn short_name_unchanged() {
        assert_eq!(elide_file_name("short.mp3", 60), "short.mp3");
    }

    #[test]
    fn exact_fit_unchanged() {
        assert_eq!(elide_file_name("abcde.mp3", 9), "abcde.mp3");
    }

    #[test]
    fn zero_budget_disables() {
        let name = "x".repeat(300) + ".mp3";
        assert_eq!(elide_file_name(&name, 0), name);
    }

    #[test]
    fn head_and_tail_around_ellipsis() {
        // budget 20, ext ".mp3" → reserve 5, avail 15, head 9, tail 6
        let out = elide_file_name("abcdefghijklmnopqrstuvwxyz.mp3", 20);
        assert_eq!(out, "abcdefghi…uvwxyz.mp3");
        assert_eq!(out.chars().count(), 20);
    }

    #[test]
    fn tiny_budget_hard_cuts() {
        assert_eq!(elide_file_name("abcdefghij.mp3", 5), "abcd…");
        assert_eq!(elide_file_name("abcdefghij.mp3", 2), "a…");
        assert_eq!(elide_file_name("abcdefghij.mp3", 1), "…");
    }

    #[test]
    fn counts_characters_not_bytes() {
        let name = "ééééééééééééééééééééé.mp3";
        let out = elide_file_name(name, 12);
        assert_eq!(out.chars().count(), 12);
        assert!(out.ends_with(".mp3"));
    }

    #[test]
    fn never_exceeds_budget_and_keeps_extension() {
        let name = "The quick brown fox jumps over the lazy dog - remastered.flac";
        for budget in 1..name.chars().count() {
            let out = elide_file_name(name, budget);
            assert!(out.chars().count() <= budget, "budget {budget}: {out}");
            if budget > ".flac".len() + 1 {
                assert!(out.ends_with(".flac"), "budget {budget}: {out}");
            }
        }
    }

    #[test]
    fn extensionless_name_elided() {
        let out = elide_file_name("abcdefghijklmnop", 10);
        assert_eq!(out.chars().count(), 10);
        assert!(out.starts_with("abcde"));
        assert!(out.contains('…'));
    }

    // =========================================================================
    // slugify
    // =========================================================================

    #[test]
    fn slug_lowercases_and_dashes() {
        assert_eq!(slugify("Music & Talk!"), "music-talk");
    }

    #[test]
    fn slug_collapses_and_trims() {
        assert_eq!(slugify("  --Hello,   World--  "), "hello-world");
    }

    #[test]
    fn slug_keeps_unicode_letters() {
        assert_eq!(slugify("Canções Ñ"), "canções-ñ");
    }

    #[test]
    fn slug_empty_falls_back() {
        assert_eq!(slugify(""), "section");
        assert_eq!(slugify("!!!"), "section");
    }

    #[test]
    fn slug_plain_directory_name() {
        assert_eq!(slugify("podcasts"), "podcasts");
    }
}
