//! Heading extraction and anchor insertion
//!
//! Both operations run the same scan with their own [`Slugger`], so the ids
//! that [`add_heading_ids`] writes into a document are the fragments that
//! [`extract_headings`] reports for it.

use crate::parser::{HeadingLine, LineScanner, trailing_marker};
use crate::slug::{Slugger, base_fragment};
use crate::types::{ExtractOptions, HeadingEntry};

/// Extract level 1-3 headings with unique fragments, in document order.
///
/// # Examples
/// ```
/// let headings = mdtoc::extract_headings("# Title\n\nSome text\n\n## Subheading\n");
/// assert_eq!(headings.len(), 2);
/// assert_eq!(headings[0].fragment, "#title");
/// assert_eq!(headings[1].fragment, "#subheading");
/// ```
pub fn extract_headings(content: &str) -> Vec<HeadingEntry> {
    extract_headings_with(content, &ExtractOptions::default())
}

/// Extract headings using the given options
pub fn extract_headings_with(content: &str, options: &ExtractOptions) -> Vec<HeadingEntry> {
    let mut slugger = Slugger::new(options);
    extract_with_slugger(content, options, &mut slugger)
}

/// Extract headings, drawing ids from an existing slugger.
///
/// Ids already reserved in `slugger` are never handed to a heading.
pub fn extract_with_slugger(
    content: &str,
    options: &ExtractOptions,
    slugger: &mut Slugger,
) -> Vec<HeadingEntry> {
    let headings: Vec<HeadingEntry> =
        LineScanner::new(content, options.skip_code_fences, options.honor_explicit_ids)
            .filter_map(|line| {
                let heading = line.heading?;
                let id = assign_id(slugger, &heading);
                Some(HeadingEntry::new(heading.title, &id, heading.level, line.index))
            })
            .collect();

    log::debug!("extracted {} heading(s)", headings.len());
    headings
}

/// Append a `{#id}` marker to every heading line.
///
/// Everything else is left byte-for-byte as it was, including line count and
/// `\r\n` endings. By default a marker already on the line is just title
/// text and a new one is appended after it. With
/// [`ExtractOptions::honor_explicit_ids`] an existing marker is kept unless
/// its id had to be normalised or made unique, so running this twice changes
/// nothing the second time.
///
/// # Examples
/// ```
/// let out = mdtoc::add_heading_ids("# A\ntext\n# A\n");
/// assert_eq!(out, "# A {#a}\ntext\n# A {#a-1}\n");
/// ```
pub fn add_heading_ids(content: &str) -> String {
    add_heading_ids_with(content, &ExtractOptions::default())
}

/// Insert heading ids using the given options
pub fn add_heading_ids_with(content: &str, options: &ExtractOptions) -> String {
    let mut slugger = Slugger::new(options);
    let mut rewritten = 0usize;

    let lines: Vec<String> =
        LineScanner::new(content, options.skip_code_fences, options.honor_explicit_ids)
            .map(|line| {
                let Some(heading) = line.heading else {
                    return line.text.to_string();
                };
                let id = assign_id(&mut slugger, &heading);
                if heading.explicit_id == Some(id.as_str()) {
                    return line.text.to_string();
                }

                rewritten += 1;
                let line_ending = if line.text.ends_with('\r') { "\r" } else { "" };
                format!(
                    "{} {{#{}}}{}",
                    &line.text[..heading.title_end],
                    id,
                    line_ending
                )
            })
            .collect();

    log::debug!("added ids to {} heading(s)", rewritten);
    lines.join("\n")
}

/// Ids of the `{#id}` markers on heading lines, in document order.
///
/// # Examples
/// ```
/// let text = mdtoc::add_heading_ids("# Intro\n# Intro\n");
/// assert_eq!(mdtoc::parse_heading_ids(&text), vec!["intro", "intro-1"]);
/// ```
pub fn parse_heading_ids(content: &str) -> Vec<String> {
    parse_heading_ids_with(content, &ExtractOptions::default())
}

/// Parse heading markers, recognising headings per `options`
pub fn parse_heading_ids_with(content: &str, options: &ExtractOptions) -> Vec<String> {
    LineScanner::new(content, options.skip_code_fences, false)
        .filter(|line| line.heading.is_some())
        .filter_map(|line| trailing_marker(line.text))
        .map(str::to_string)
        .collect()
}

fn assign_id(slugger: &mut Slugger, heading: &HeadingLine<'_>) -> String {
    let explicit = heading.explicit_id.map(base_fragment).filter(|base| !base.is_empty());
    match explicit {
        Some(base) => slugger.assign(base, heading.level),
        None => slugger.slug(heading.title, heading.level),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slug::SuffixStyle;
    use crate::types::HeadingLevel;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_title_and_subheading() {
        let headings = extract_headings("# Title\n\nSome text\n\n## Subheading\n");
        assert_eq!(
            headings,
            vec![
                HeadingEntry::new("Title", "title", HeadingLevel::H1, 0),
                HeadingEntry::new("Subheading", "subheading", HeadingLevel::H2, 4),
            ]
        );
    }

    #[test]
    fn test_duplicate_titles() {
        let headings = extract_headings("# Intro\n# Intro\n");
        assert_eq!(headings[0].fragment, "#intro");
        assert_eq!(headings[1].fragment, "#intro-1");
    }

    #[test]
    fn test_four_hashes_ignored() {
        let headings = extract_headings("#### Not a heading\n# Real Heading\n");
        assert_eq!(headings.len(), 1);
        assert_eq!(headings[0].title, "Real Heading");
        assert_eq!(headings[0].fragment, "#real-heading");
    }

    #[test]
    fn test_punctuation_stripped() {
        let headings = extract_headings("## Hello, World!\n");
        assert_eq!(headings[0].fragment, "#hello-world");
        assert_eq!(headings[0].title, "Hello, World!");
    }

    #[test]
    fn test_empty_input() {
        assert!(extract_headings("").is_empty());
        assert_eq!(add_heading_ids(""), "");
    }

    #[test]
    fn test_add_heading_ids_scenario() {
        assert_eq!(add_heading_ids("# A\ntext\n# A\n"), "# A {#a}\ntext\n# A {#a-1}\n");
    }

    #[test]
    fn test_add_heading_ids_keeps_prefix_and_crlf() {
        let out = add_heading_ids("##\tTab  \r\nbody\r\n");
        assert_eq!(out, "##\tTab {#tab}\r\nbody\r\n");
    }

    #[test]
    fn test_add_heading_ids_idempotent_with_explicit_ids() {
        let options = ExtractOptions::new().honor_explicit_ids();
        let content = "# A\n# A\n# A-1\nbody\n## A\n";
        let once = add_heading_ids_with(content, &options);
        assert_eq!(once, "# A {#a}\n# A {#a-1}\n# A-1 {#a-1-1}\nbody\n## A {#a-2}\n");
        assert_eq!(add_heading_ids_with(&once, &options), once);
    }

    #[test]
    fn test_markers_are_title_text_by_default() {
        let headings = extract_headings("# Intro {#My_Id}\n");
        assert_eq!(headings[0].title, "Intro {#My_Id}");
        assert_eq!(headings[0].fragment, "#intro-myid");

        assert_eq!(add_heading_ids("# One {#dup}\n"), "# One {#dup} {#one-dup}\n");
    }

    #[test]
    fn test_explicit_ids_are_disambiguated() {
        let options = ExtractOptions::new().honor_explicit_ids();
        let content = "# One {#dup}\n# Two {#dup}\n";
        let headings = extract_headings_with(content, &options);
        assert_eq!(headings[0].fragment, "#dup");
        assert_eq!(headings[1].fragment, "#dup-1");
        assert_eq!(headings[1].title, "Two");
        assert_eq!(
            add_heading_ids_with(content, &options),
            "# One {#dup}\n# Two {#dup-1}\n"
        );
    }

    #[test]
    fn test_explicit_ids_are_normalised() {
        let options = ExtractOptions::new().honor_explicit_ids();
        let headings = extract_headings_with("# Intro {#My_Id}\n## Setup {#___}\n", &options);
        assert_eq!(headings[0].title, "Intro");
        assert_eq!(headings[0].fragment, "#myid");
        // Nothing sluggable in the marker, so the title decides
        assert_eq!(headings[1].fragment, "#setup");

        assert_eq!(
            add_heading_ids_with("# Intro {#My_Id}\n", &options),
            "# Intro {#myid}\n"
        );
    }

    #[test]
    fn test_level_suffix_style() {
        let options = ExtractOptions::new().with_suffix_style(SuffixStyle::Level);
        let headings = extract_headings_with("# Intro\n## Intro\n### Intro\n", &options);
        let ids: Vec<_> = headings.iter().map(|h| h.id()).collect();
        assert_eq!(ids, vec!["intro", "intro-subsection-1", "intro-item-1"]);
    }

    #[test]
    fn test_empty_base_falls_back() {
        let headings = extract_headings("# ???\n## !!!\n");
        assert_eq!(headings[0].fragment, "#section");
        assert_eq!(headings[1].fragment, "#section-1");
    }

    #[test]
    fn test_parse_heading_ids_roundtrip() {
        let content = "# Title\n## Setup\n## Setup\nbody {#not-a-heading}\n### Done!\n";
        let annotated = add_heading_ids(content);
        let expected: Vec<String> = extract_headings(content)
            .iter()
            .map(|h| h.id().to_string())
            .collect();
        assert_eq!(parse_heading_ids(&annotated), expected);
    }

    #[test]
    fn test_code_fences_skipped_when_enabled() {
        let content = "# Real\n```sh\n# comment\n```\n";
        assert_eq!(extract_headings(content).len(), 2);

        let options = ExtractOptions::new().skip_code_fences();
        assert_eq!(extract_headings_with(content, &options).len(), 1);
        assert_eq!(
            add_heading_ids_with(content, &options),
            "# Real {#real}\n```sh\n# comment\n```\n"
        );
    }

    #[test]
    fn test_extraction_is_repeatable() {
        let content = "# Same\n# Same\n";
        assert_eq!(extract_headings(content), extract_headings(content));
    }
}
