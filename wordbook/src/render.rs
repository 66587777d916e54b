//! Draws the page as a block of ANSI-coloured text.

use std::fmt::Write;

use dictionary::{EntrySummary, NounSection, VerbSection};

use crate::search::SearchForm;
use crate::status::LookupStatus;
use crate::theme::{Palette, Theme};

pub struct Page<'a> {
    pub theme: Theme,
    pub form: &'a SearchForm,
    pub status: &'a LookupStatus,
}

pub fn page(page: &Page) -> String {
    let palette = page.theme.palette();
    let mut out = String::new();
    header(&mut out, page.theme, &palette);
    if let Some(validation) = page.form.validation() {
        let _ = writeln!(out, "{}{validation}{}", palette.error, Palette::RESET);
    }
    out.push('\n');

    match page.status {
        LookupStatus::Idle => welcome(&mut out, &palette),
        LookupStatus::Loading { .. } => {
            let _ = writeln!(out, "{}Loading…{}", palette.dim, Palette::RESET);
        }
        LookupStatus::Error { word, message } => {
            let _ = writeln!(out, "{}“{word}”{}", palette.dim, Palette::RESET);
            let _ = writeln!(out, "{}Error: {message}{}", palette.error, Palette::RESET);
        }
        LookupStatus::Success { word, .. } => match page.status.summary() {
            Some(summary) => entry(&mut out, &summary, &palette),
            None => {
                let _ = writeln!(out, "{}No entries for “{word}”.{}", palette.dim, Palette::RESET);
            }
        },
    }
    out
}

fn header(out: &mut String, theme: Theme, palette: &Palette) {
    let icon = if theme.is_dark() { "☾" } else { "☀" };
    let _ = writeln!(
        out,
        "{}{}wordbook{}  {}[{theme} {icon}  :theme to switch]{}",
        Palette::BOLD,
        palette.accent,
        Palette::RESET,
        palette.dim,
        Palette::RESET
    );
}

fn welcome(out: &mut String, palette: &Palette) {
    let _ = writeln!(out, "{}{}Welcome 👋{}", Palette::BOLD, palette.text, Palette::RESET);
    let _ = writeln!(
        out,
        "{}{}What word are you looking for?{}",
        Palette::BOLD,
        palette.text,
        Palette::RESET
    );
    let _ = writeln!(
        out,
        "{}Type a word and press Enter to search.{}",
        palette.dim,
        Palette::RESET
    );
}

fn entry(out: &mut String, summary: &EntrySummary, palette: &Palette) {
    let _ = write!(
        out,
        "{}{}{}{}",
        Palette::BOLD,
        palette.text,
        summary.word,
        Palette::RESET
    );
    if summary.audio_url.is_some() {
        let _ = write!(out, "  {}[:play 🔊]{}", palette.accent, Palette::RESET);
    }
    // an empty phonetic still counts as resolved but has nothing to show
    if let Some(phonetic) = summary.phonetic.as_deref().filter(|p| !p.is_empty()) {
        let _ = write!(out, "  {}{phonetic}{}", palette.dim, Palette::RESET);
    }
    out.push('\n');

    if let Some(noun) = &summary.noun {
        noun_section(out, noun, palette);
    }
    if let Some(verb) = &summary.verb {
        verb_section(out, verb, palette);
    }
}

fn section_title(out: &mut String, title: &str, palette: &Palette) {
    let _ = writeln!(
        out,
        "\n{}{}{title}{}",
        Palette::BOLD,
        palette.text,
        Palette::RESET
    );
}

fn noun_section(out: &mut String, noun: &NounSection, palette: &Palette) {
    section_title(out, "Noun", palette);
    for definition in &noun.definitions {
        let _ = writeln!(
            out,
            "  {}{}.{} {}",
            palette.accent,
            definition.number,
            Palette::RESET,
            definition.text
        );
    }
    if let Some(synonyms) = &noun.synonyms {
        let _ = writeln!(
            out,
            "  {}Synonyms:{} {}{synonyms}{}",
            palette.dim,
            Palette::RESET,
            palette.accent,
            Palette::RESET
        );
    }
}

fn verb_section(out: &mut String, verb: &VerbSection, palette: &Palette) {
    section_title(out, "Verb", palette);
    for definition in &verb.definitions {
        let _ = writeln!(
            out,
            "  {}{}.{} {}",
            palette.accent,
            definition.number,
            Palette::RESET,
            definition.text
        );
        if let Some(example) = &definition.example {
            let _ = writeln!(
                out,
                "     {}{}Example:{} {}“{example}”{}",
                palette.dim,
                Palette::ITALIC,
                Palette::RESET,
                palette.dim,
                Palette::RESET
            );
        }
    }
}
