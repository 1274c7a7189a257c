//! Section segmentation — splits free resume text into experience, skills and
//! education blocks by heading keywords.
//!
//! A section starts at a heading line carrying one of its own keywords and ends
//! at the first heading line carrying a keyword of another section. A missing
//! heading yields an empty result, never an error.

use std::collections::HashSet;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

pub const MAX_EXPERIENCE_ENTRIES: usize = 5;
pub const MAX_SKILLS: usize = 15;
pub const MAX_EDUCATION_ENTRIES: usize = 3;

/// Longest heading, in words, before a keyword line is treated as content.
const MAX_HEADING_WORDS: usize = 5;

const EXPERIENCE_KEYWORDS: &[&str] = &[
    "experience",
    "employment",
    "work history",
    "professional experience",
    "career",
    "positions",
    "roles",
];
const SKILLS_KEYWORDS: &[&str] = &["skills", "technologies", "technical skills", "competencies"];
const EDUCATION_KEYWORDS: &[&str] = &["education", "academic", "university", "college", "degree"];

/// Headings that end a section without opening one.
const UNSEGMENTED_HEADINGS: &[&str] = &["projects", "certifications"];

pub const SECTION_KINDS: [SectionKind; 3] = [
    SectionKind::Experience,
    SectionKind::Skills,
    SectionKind::Education,
];

const DEGREE_KEYWORDS: &[&str] = &[
    "bachelor",
    "master",
    "phd",
    "doctorate",
    "associate",
    "certificate",
];

static YEAR_RANGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\d{4}\s*[-–]\s*(?:\d{4}|present)").unwrap());
static COMPANY_SUFFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:inc|corp|ltd)\b").unwrap());
static SKILL_NOISE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s+#.]").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Experience,
    Skills,
    Education,
}

impl SectionKind {
    fn heading_keywords(self) -> &'static [&'static str] {
        match self {
            SectionKind::Experience => EXPERIENCE_KEYWORDS,
            SectionKind::Skills => SKILLS_KEYWORDS,
            SectionKind::Education => EDUCATION_KEYWORDS,
        }
    }

    /// A heading of any other kind closes this section, as do project and
    /// certification headings, which are never segmented themselves.
    fn is_boundary(self, line: &str) -> bool {
        SECTION_KINDS
            .into_iter()
            .filter(|kind| *kind != self)
            .any(|kind| is_heading_for(line, kind.heading_keywords()))
            || is_heading_for(line, UNSEGMENTED_HEADINGS)
    }

    fn cap(self) -> usize {
        match self {
            SectionKind::Experience => MAX_EXPERIENCE_ENTRIES,
            SectionKind::Skills => MAX_SKILLS,
            SectionKind::Education => MAX_EDUCATION_ENTRIES,
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SectionKind::Experience => "experience",
            SectionKind::Skills => "skills",
            SectionKind::Education => "education",
        };
        f.write_str(name)
    }
}

/// Splits `text` into entries of the requested section kind, truncated to the
/// kind's cap (experience 5, skills 15, education 3).
pub fn segment(text: &str, kind: SectionKind) -> Vec<String> {
    let mut entries = match kind {
        SectionKind::Experience => segment_experience(text),
        SectionKind::Skills => segment_skills(text),
        SectionKind::Education => segment_education(text),
    };
    entries.truncate(kind.cap());
    entries
}

/// True when some heading line of the document opens a section of this kind.
pub fn has_heading(text: &str, kind: SectionKind) -> bool {
    text.lines()
        .map(str::trim)
        .any(|line| is_heading_for(line, kind.heading_keywords()))
}

/// The part of a line that could be a heading: text before a `:` if present.
fn heading_part(line: &str) -> &str {
    line.split_once(':').map_or(line, |(head, _)| head)
}

fn is_heading_for(line: &str, keywords: &[&str]) -> bool {
    let head = heading_part(line);
    if head.split_whitespace().count() > MAX_HEADING_WORDS {
        return false;
    }
    let lower = head.to_lowercase();
    keywords.iter().any(|kw| lower.contains(kw))
}

fn segment_experience(text: &str) -> Vec<String> {
    let kind = SectionKind::Experience;
    let mut entries = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut in_section = false;

    for line in text.lines().map(str::trim) {
        if !in_section {
            in_section = is_heading_for(line, kind.heading_keywords());
            continue;
        }

        if line.is_empty() {
            flush_entry(&mut current, &mut entries);
            continue;
        }

        if kind.is_boundary(line) {
            break;
        }

        if starts_new_entry(line) {
            flush_entry(&mut current, &mut entries);
        }
        current.push(line);
    }

    flush_entry(&mut current, &mut entries);
    entries
}

fn starts_new_entry(line: &str) -> bool {
    is_all_caps(line) || COMPANY_SUFFIX_RE.is_match(line) || YEAR_RANGE_RE.is_match(line)
}

fn is_all_caps(line: &str) -> bool {
    let mut letters = line.chars().filter(|c| c.is_alphabetic()).peekable();
    letters.peek().is_some() && letters.all(|c| !c.is_lowercase())
}

fn flush_entry(current: &mut Vec<&str>, entries: &mut Vec<String>) {
    if !current.is_empty() {
        entries.push(current.join(" "));
        current.clear();
    }
}

fn segment_skills(text: &str) -> Vec<String> {
    let kind = SectionKind::Skills;
    let mut raw: Vec<&str> = Vec::new();
    let mut in_section = false;

    for line in text.lines().map(str::trim) {
        if line.is_empty() {
            continue;
        }

        if !in_section {
            if is_heading_for(line, kind.heading_keywords()) {
                in_section = true;
                if let Some((_, inline)) = line.split_once(':') {
                    raw.extend(split_skill_line(inline));
                }
            }
            continue;
        }

        if kind.is_boundary(line) {
            break;
        }
        raw.extend(split_skill_line(line));
    }

    let mut seen = HashSet::new();
    raw.into_iter()
        .map(clean_skill)
        .filter(|skill| skill.chars().count() > 1)
        .filter(|skill| seen.insert(skill.to_lowercase()))
        .collect()
}

fn split_skill_line(line: &str) -> impl Iterator<Item = &str> {
    line.split([',', '•', '·'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

fn clean_skill(skill: &str) -> String {
    SKILL_NOISE_RE.replace_all(skill, "").trim().to_string()
}

fn segment_education(text: &str) -> Vec<String> {
    let kind = SectionKind::Education;
    let mut entries: Vec<String> = Vec::new();
    let mut in_section = false;
    let mut section_closed = false;

    for line in text.lines().map(str::trim) {
        if line.is_empty() {
            continue;
        }

        if !in_section && !section_closed && is_heading_for(line, kind.heading_keywords()) {
            in_section = true;
            continue;
        }

        if in_section && kind.is_boundary(line) {
            in_section = false;
            section_closed = true;
        }

        let mentions_degree = {
            let lower = line.to_lowercase();
            DEGREE_KEYWORDS.iter().any(|kw| lower.contains(kw))
        };

        if (in_section || mentions_degree) && !entries.iter().any(|e| e == line) {
            entries.push(line.to_string());
        }
    }

    entries
}
