//! Insta snapshot tests for mdtoc
//!
//! These tests render a fixture post in each output shape so that any change
//! in anchor generation or formatting shows up as a snapshot diff.

use mdtoc::{ExtractOptions, TableOfContents, TocOptions, add_heading_ids, formatters, toc_sync};

const POST: &str = "\
# Building a Portfolio Site

Intro paragraph.

## Why Another Blog?

## The Stack: Next.js & MDX

### Content

### Content

## FAQ

#### Not in the outline

## ???
";

#[test]
fn snapshot_markdown_outline() {
    let toc = TableOfContents::new(POST, Some("Portfolio"), &ExtractOptions::default());
    insta::assert_snapshot!(toc.to_markdown().trim_end(), @r"
- [Portfolio](#title)
- [Building a Portfolio Site](#building-a-portfolio-site)
  - [Why Another Blog?](#why-another-blog)
  - [The Stack: Next.js & MDX](#the-stack-nextjs-mdx)
    - [Content](#content)
    - [Content](#content-1)
  - [FAQ](#faq)
  - [???](#section)
");
}

#[test]
fn snapshot_annotated_post() {
    insta::assert_snapshot!(add_heading_ids(POST).trim_end(), @r"
# Building a Portfolio Site {#building-a-portfolio-site}

Intro paragraph.

## Why Another Blog? {#why-another-blog}

## The Stack: Next.js & MDX {#the-stack-nextjs-mdx}

### Content {#content}

### Content {#content-1}

## FAQ {#faq}

#### Not in the outline

## ??? {#section}
");
}

#[test]
fn snapshot_text_output() {
    let options = TocOptions::new().with_string("post.mdx", POST);
    let results = toc_sync(&options).unwrap();
    insta::assert_snapshot!(formatters::format_text(&results, true), @r"
post.mdx: 30 words, 1 min
post.mdx:1: # Building a Portfolio Site (#building-a-portfolio-site)
post.mdx:5: ## Why Another Blog? (#why-another-blog)
post.mdx:7: ## The Stack: Next.js & MDX (#the-stack-nextjs-mdx)
post.mdx:9: ### Content (#content)
post.mdx:11: ### Content (#content-1)
post.mdx:13: ## FAQ (#faq)
post.mdx:17: ## ??? (#section)
");
}
