//! Properties the converter guarantees for arbitrary input.

use mdpress_convert::{convert, convert_with_options, ConvertOptions};
use proptest::prelude::*;

proptest! {
    // Conversion has no failure modes: any input produces some output.
    #[test]
    fn conversion_never_panics(input in any::<String>()) {
        let _ = convert(&input);
    }

    #[test]
    fn conversion_is_deterministic(input in any::<String>()) {
        prop_assert_eq!(convert(&input), convert(&input));
    }

    #[test]
    fn indent_width_never_causes_a_panic(input in any::<String>(), width in 0usize..8) {
        let options = ConvertOptions::with_indent_width(width);
        let _ = convert_with_options(&input, &options);
    }

    // The placeholder mark cannot leak into output: it is stripped from the
    // input up front and every generated token is reinserted.
    #[test]
    fn placeholder_mark_never_survives(input in any::<String>()) {
        prop_assert!(!convert(&input).contains('\u{FFFC}'));
    }

    // Restricted to inputs without literal angle brackets so that every
    // list tag in the output was emitted by the list stage itself.
    #[test]
    fn list_tags_always_balance(input in "[^<]*") {
        let html = convert(&input);
        prop_assert_eq!(html.matches("<ul>").count(), html.matches("</ul>").count());
    }
}
