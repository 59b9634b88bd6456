//! Edition-specific field removal

use summit_content::{LineDoc, EDITION_SPECIFIC_FIELDS};

/// Drop every line whose trimmed text starts with an edition-specific field
/// prefix; all other lines are kept verbatim and in order
#[must_use]
pub fn strip_edition_fields(doc: LineDoc) -> LineDoc {
    doc.retain(|line| {
        !EDITION_SPECIFIC_FIELDS
            .iter()
            .any(|prefix| line.starts_with_trimmed(prefix))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn strip(text: &str) -> String {
        strip_edition_fields(LineDoc::parse(text)).render()
    }

    #[test]
    fn drops_role_keeps_rest_in_order() {
        assert_eq!(
            strip("name: Ada\nrole: Organizer\nbio: text\n"),
            "name: Ada\nbio: text\n"
        );
    }

    #[test]
    fn drops_every_edition_field() {
        let input = "name: Ada\nrole: Chair\nroleWeight: 10\nisFeatured: true\nedition: 2025 Lisbon\n\
                     customImage: /img.png\nlink: https://ada.example\ngithubId: ada\naffiliation: Uni\n";
        assert_eq!(strip(input), "name: Ada\naffiliation: Uni\n");
    }

    #[test]
    fn matches_after_trimming_only() {
        assert_eq!(strip("  role: nested\nlinkedin: ada\n"), "linkedin: ada\n");
    }

    #[test]
    fn keeps_line_endings_verbatim() {
        assert_eq!(strip("name: Ada\r\nrole: x\r\nphoto: p.png"), "name: Ada\r\nphoto: p.png");
    }

    #[test]
    fn already_clean_is_unchanged() {
        let clean = "name: Ada\naffiliation: Uni\n";
        assert_eq!(strip(clean), clean);
        assert_eq!(strip(&strip(clean)), clean);
    }

    proptest! {
        #[test]
        fn prop_never_drops_unprefixed_lines(
            lines in prop::collection::vec(
                prop_oneof![
                    "[a-zA-Z]{1,10}: [a-z ]{0,10}",
                    Just("role: Chair".to_string()),
                    Just("  edition: 2025".to_string()),
                    Just("githubId: x".to_string()),
                ],
                0..20,
            )
        ) {
            let text: String = lines.iter().map(|l| format!("{l}\n")).collect();
            let expected: Vec<&String> = lines
                .iter()
                .filter(|l| !EDITION_SPECIFIC_FIELDS.iter().any(|p| l.trim().starts_with(p)))
                .collect();
            let out = strip(&text);
            let kept: Vec<&str> = out.lines().collect();
            prop_assert_eq!(kept, expected.iter().map(|s| s.as_str()).collect::<Vec<_>>());
        }
    }
}
