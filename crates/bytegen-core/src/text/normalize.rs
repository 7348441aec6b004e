// crates/bytegen-core/src/text/normalize.rs

use std::borrow::Cow;

use unicode_normalization::{is_nfc, is_nfd, is_nfkc, is_nfkd, UnicodeNormalization};

use crate::config::options::NormalizationForm;

/// Apply `form`. Input already in that form (and `None`) is returned borrowed.
pub fn normalize(text: &str, form: NormalizationForm) -> Cow<'_, str> {
    match form {
        NormalizationForm::None => Cow::Borrowed(text),
        NormalizationForm::CanonicalComposed if is_nfc(text) => Cow::Borrowed(text),
        NormalizationForm::CanonicalComposed => Cow::Owned(text.nfc().collect()),
        NormalizationForm::CanonicalDecomposed if is_nfd(text) => Cow::Borrowed(text),
        NormalizationForm::CanonicalDecomposed => Cow::Owned(text.nfd().collect()),
        NormalizationForm::CompatibilityComposed if is_nfkc(text) => Cow::Borrowed(text),
        NormalizationForm::CompatibilityComposed => Cow::Owned(text.nfkc().collect()),
        NormalizationForm::CompatibilityDecomposed if is_nfkd(text) => Cow::Borrowed(text),
        NormalizationForm::CompatibilityDecomposed => Cow::Owned(text.nfkd().collect()),
    }
}
