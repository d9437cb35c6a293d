use std::cmp::Ordering;

use icu_collator::{Collator, CollatorOptions};

thread_local! {
    static COLLATOR: Option<Collator> = Collator::try_new(&Default::default(), CollatorOptions::new()).ok();
}

/// Dictionary order using the Unicode root collation: accents and case only
/// decide between strings that are otherwise equal, lower case sorts first.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    COLLATOR.with(|collator| match collator {
        Some(collator) => collator.compare(a, b),
        None => case_folded_cmp(a, b),
    })
    .then_with(|| a.cmp(b))
}

fn case_folded_cmp(a: &str, b: &str) -> Ordering {
    a.chars().flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
        .then_with(|| a.chars().map(char::is_uppercase).cmp(b.chars().map(char::is_uppercase)))
}
