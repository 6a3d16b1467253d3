//! System-instruction and structuring-prompt construction.

use devhub_core::import::RepoSummary;
use devhub_core::project::Project;

/// Build the chat system instruction, embedding a one-line summary of
/// every catalog entry (title, category, tags) so the assistant can
/// answer catalog questions directly.
pub fn chat_system_instruction(catalog: &[Project]) -> String {
    let summary = catalog
        .iter()
        .map(|p| format!("- {} ({}): {}", p.title, p.category, p.tags.join(", ")))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "You are the \"DevHub Intelligence\", a senior-level AI assistant for this portfolio.\n\
         CONTEXT:\n\
         This portfolio showcases {count} professional projects built with modern stacks.\n\
         PROJECT DATA SUMMARY:\n\
         {summary}\n\n\
         BEHAVIOR:\n\
         1. Be technically precise and concise.\n\
         2. If a user asks for projects using a specific technology, suggest 3 specific ones from the list.\n\
         3. If asked about experience, mention that the developer has {count} projects ranging from AI to E-commerce.\n\
         4. Always maintain a dark-mode, tech-focused personality.\n\
         5. Max response length: 120 words.",
        count = catalog.len(),
    )
}

/// Build the one-shot structuring prompt from raw repository metadata.
pub fn structuring_prompt(repos: &[RepoSummary]) -> String {
    let listing = repos
        .iter()
        .map(|r| {
            format!(
                "- name: {}\n  description: {}\n  language: {}\n  topics: {}",
                r.name,
                r.description.as_deref().unwrap_or("(none)"),
                r.language.as_deref().unwrap_or("(unknown)"),
                if r.topics.is_empty() {
                    "(none)".to_string()
                } else {
                    r.topics.join(", ")
                },
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "Turn the following GitHub repositories into polished portfolio entries. \
         For each repository produce a title, a concise professional description \
         (max 30 words), the best-fitting category, and 3-5 technology tags. \
         Return one entry per repository, in the same order.\n\n\
         REPOSITORIES:\n{listing}"
    )
}
