//! Slug normalisation shared by place keys and DOM ids.

/// Lower-cases `value` and collapses every run of characters outside
/// `[a-z0-9]` into a single `-`, with no dash at either end.
pub fn slugify(value: &str) -> String {
    let mut slug = String::with_capacity(value.len());
    let mut pending_dash = false;

    for c in value.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c);
        } else {
            pending_dash = true;
        }
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_are_fixed_points() {
        assert_eq!(slugify("new-york"), "new-york");
        assert_eq!(slugify(&slugify("New York")), slugify("New York"));
    }

    #[test]
    fn separators_collapse_and_trim() {
        assert_eq!(slugify("  New York__City "), "new-york-city");
        assert_eq!(slugify("(Agency) OH001"), "agency-oh001");
        assert_eq!(slugify("---"), "");
    }
}
