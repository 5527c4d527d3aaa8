//! Reply translations.
//!
//! Messages live in Fluent resources under `locales/<lang>/`, embedded at compile time and
//! parsed once at startup into one bundle per language. Guild languages are stored as short
//! codes (`en`, `nl`); anything unrecognised falls back to English, and so does a key missing
//! from a translation.

use std::collections::HashMap;

use fluent::{FluentArgs, FluentResource};
use fluent_bundle::bundle::FluentBundle;
use unic_langid::{langid, LanguageIdentifier};

use crate::error::locale::LocaleError;

// Concurrent memoizer keeps the bundles Send + Sync for poise's shared data.
type ConcurrentBundle = FluentBundle<FluentResource, intl_memoizer::concurrent::IntlLangMemoizer>;

const EN_RESOURCES: &[(&str, &str)] = &[
    ("general.ftl", include_str!("../locales/en/general.ftl")),
    ("settings.ftl", include_str!("../locales/en/settings.ftl")),
    ("premium.ftl", include_str!("../locales/en/premium.ftl")),
    ("invites.ftl", include_str!("../locales/en/invites.ftl")),
];

const NL_RESOURCES: &[(&str, &str)] = &[
    ("general.ftl", include_str!("../locales/nl/general.ftl")),
    ("settings.ftl", include_str!("../locales/nl/settings.ftl")),
    ("premium.ftl", include_str!("../locales/nl/premium.ftl")),
    ("invites.ftl", include_str!("../locales/nl/invites.ftl")),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lang {
    En,
    Nl,
}

impl Lang {
    pub const ALL: [Lang; 2] = [Lang::En, Lang::Nl];

    /// Parses a stored language code or locale tag such as `nl` or `en-US`.
    pub fn parse(code: &str) -> Option<Self> {
        let id = code.trim().parse::<LanguageIdentifier>().ok()?;

        match id.language.as_str() {
            "en" => Some(Lang::En),
            "nl" => Some(Lang::Nl),
            _ => None,
        }
    }

    /// Parses a stored language code, falling back to English.
    pub fn from_code(code: &str) -> Self {
        Self::parse(code).unwrap_or(Lang::En)
    }

    pub fn code(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Nl => "nl",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Lang::En => "English",
            Lang::Nl => "Nederlands",
        }
    }

    pub fn id(self) -> LanguageIdentifier {
        match self {
            Lang::En => langid!("en"),
            Lang::Nl => langid!("nl"),
        }
    }

    fn resources(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Lang::En => EN_RESOURCES,
            Lang::Nl => NL_RESOURCES,
        }
    }
}

/// Parsed Fluent bundles for every supported language.
pub struct Locales {
    bundles: HashMap<LanguageIdentifier, ConcurrentBundle>,
}

impl Locales {
    /// Parses the embedded resources of every language.
    ///
    /// # Returns
    /// - `Ok(Locales)`: Every resource parsed and every message id is unique per language
    /// - `Err(LocaleError)`: A resource has a syntax error or redefines a message
    pub fn load() -> Result<Self, LocaleError> {
        let mut bundles = HashMap::new();

        for lang in Lang::ALL {
            let id = lang.id();
            let mut bundle = ConcurrentBundle::new_concurrent(vec![id.clone()]);
            // Discord renders the bidi isolation marks literally.
            bundle.set_use_isolating(false);

            for (file, source) in lang.resources() {
                let resource = FluentResource::try_new(source.to_string()).map_err(
                    |(_, errors)| LocaleError::Parse {
                        file: format!("{}/{}", lang.code(), file),
                        errors: format!("{:?}", errors),
                    },
                )?;

                bundle
                    .add_resource(resource)
                    .map_err(|errors| LocaleError::Resource {
                        file: format!("{}/{}", lang.code(), file),
                        errors: format!("{:?}", errors),
                    })?;
            }

            tracing::debug!("Loaded locale {}", id);
            bundles.insert(id, bundle);
        }

        Ok(Self { bundles })
    }

    /// Translator bound to one language.
    pub fn get(&self, lang: Lang) -> L10n<'_> {
        L10n {
            locales: self,
            lang,
        }
    }

    /// Formats a message, trying `lang` first and English second.
    ///
    /// Returns the key itself when no bundle defines it.
    pub fn translate(&self, lang: Lang, key: &str, args: Option<&FluentArgs>) -> String {
        let mut candidates = vec![lang.id()];
        if lang != Lang::En {
            candidates.push(Lang::En.id());
        }

        for id in candidates {
            let Some(bundle) = self.bundles.get(&id) else {
                continue;
            };
            let Some(pattern) = bundle.get_message(key).and_then(|msg| msg.value()) else {
                continue;
            };

            let mut errors = vec![];
            let text = bundle.format_pattern(pattern, args, &mut errors).into_owned();
            if !errors.is_empty() {
                tracing::warn!("Errors formatting {} for {}: {:?}", key, id, errors);
            }
            return text;
        }

        tracing::warn!("Missing translation for {}", key);
        key.to_string()
    }
}

/// Translator for one language, handed to commands.
#[derive(Clone, Copy)]
pub struct L10n<'a> {
    locales: &'a Locales,
    pub lang: Lang,
}

impl L10n<'_> {
    pub fn t(&self, key: &str) -> String {
        self.locales.translate(self.lang, key, None)
    }

    pub fn t_args(&self, key: &str, args: &FluentArgs) -> String {
        self.locales.translate(self.lang, key, Some(args))
    }
}
