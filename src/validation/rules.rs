use std::borrow::Cow;
use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;

use crate::domain::FieldId;

/// Oldest accepted birthdate, in years before now.
pub const MAX_AGE_YEARS: i32 = 120;

/// Length of a `YYYY-MM-DD` value.
pub const BIRTHDATE_LEN: usize = 10;

pub const REQUIRED_MESSAGE: &str = "Ce champ est requis pour pouvoir soumettre le formulaire.";

// `\w` is spelled out so that it keeps its ASCII meaning.
static NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_'\-,.][^0-9_!¡?÷?¿/\\+=@#$%ˆ&*(){}|~<>;:\[\]]{1,29}$")
        .expect("name pattern")
});

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_\-.+]+@([A-Za-z0-9_\-]+\.)+[A-Za-z0-9_\-]{2,3}$")
        .expect("email pattern")
});

static BIRTHDATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("birthdate pattern"));

static QUANTITY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]|[1-9][0-9])$").expect("quantity pattern"));

pub fn is_empty(value: &str) -> bool {
    value.trim().is_empty()
}

pub fn name_matches(value: &str) -> bool {
    NAME_PATTERN.is_match(value)
}

pub fn email_matches(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

pub fn quantity_matches(value: &str) -> bool {
    QUANTITY_PATTERN.is_match(value)
}

/// Parse a `YYYY-MM-DD` value into a calendar date. Impossible dates such as
/// `2023-02-30` yield `None`.
pub fn parse_birthdate(value: &str) -> Option<NaiveDate> {
    if !BIRTHDATE_PATTERN.is_match(value) {
        return None;
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// `now` shifted back by `years`. A 29 February with no counterpart rolls
/// over to 1 March.
pub fn years_before(now: NaiveDateTime, years: i32) -> NaiveDateTime {
    let year = now.year() - years;
    now.with_year(year).unwrap_or_else(|| {
        NaiveDate::from_ymd_opt(year, 3, 1)
            .map(|date| date.and_time(now.time()))
            .unwrap_or(now)
    })
}

/// Midnight of `date` must be neither after `now` nor before `now` minus
/// [`MAX_AGE_YEARS`].
pub fn birthdate_in_range(date: NaiveDate, now: NaiveDateTime) -> bool {
    let midnight = date.and_time(NaiveTime::MIN);
    let oldest = years_before(now, MAX_AGE_YEARS);
    !(midnight > now || midnight < oldest)
}

pub fn birthdate_is_valid(value: &str, now: NaiveDateTime) -> bool {
    parse_birthdate(value).is_some_and(|date| birthdate_in_range(date, now))
}

/// Keep a four digit year when a date input lets extra year digits through:
/// anything longer than ten characters becomes the first four characters
/// followed by the six starting at index five.
pub fn truncate_birthdate_input(raw: &str) -> Cow<'_, str> {
    if raw.chars().count() <= BIRTHDATE_LEN {
        return Cow::Borrowed(raw);
    }
    let head = raw.chars().take(4);
    let tail = raw.chars().skip(5).take(6);
    Cow::Owned(head.chain(tail).collect())
}

/// Pattern/range check of a text field, ignoring emptiness.
pub fn text_matches(id: FieldId, value: &str, now: NaiveDateTime) -> bool {
    match id {
        FieldId::FirstName | FieldId::LastName => name_matches(value),
        FieldId::Email => email_matches(value),
        FieldId::Birthdate => birthdate_is_valid(value, now),
        FieldId::Quantity => quantity_matches(value),
        FieldId::Location | FieldId::TermsOfUse => false,
    }
}

pub fn invalid_message(id: FieldId) -> &'static str {
    match id {
        FieldId::FirstName => {
            "Votre prénom doit être composé de 2 à 30 caractères. Les chiffres et symboles spéciaux ne sont pas valides."
        }
        FieldId::LastName => {
            "Votre nom doit être composé de 2 à 30 caractères. Les chiffres et symboles spéciaux ne sont pas valides."
        }
        FieldId::Email => "Votre email doit respecter un format valide. Exemple: john.doe@mail.com.",
        FieldId::Birthdate => {
            "Veuillez respecter un format de date valide type AAAA-MM-JJ. Si votre année de naissance est antérieure à 120 ans vous ne jouez probablement plus aux jeux vidéos. Si votre année de naissance est ultérieure à l'année actuelle vous n'y jouez probablement pas encore."
        }
        FieldId::Quantity => "Le nombre de tournois doit être compris entre 0 et 99.",
        FieldId::Location => "Veuillez sélectionner une option dans la liste.",
        FieldId::TermsOfUse => "Veuillez accepter les conditions d'utilisation.",
    }
}
