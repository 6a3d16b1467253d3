//! The fixed fallback catalog.
//!
//! Served whenever the remote store is unreachable, times out, or
//! returns zero rows, so the portfolio never renders empty. The content
//! is deterministic: ids, dates, and tags are derived from the entry
//! index, and two consecutive calls produce identical lists.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::project::{Category, Project, ALL_CATEGORIES};

const TECHNOLOGIES: [&str; 20] = [
    "React 19",
    "TypeScript",
    "Tailwind CSS",
    "Next.js 15",
    "Node.js",
    "GraphQL",
    "PostgreSQL",
    "Three.js",
    "D3.js",
    "Firebase",
    "Supabase",
    "Redux Toolkit",
    "Zustand",
    "Gemini AI",
    "Vite",
    "WebSockets",
    "Radix UI",
    "Framer Motion",
    "Prisma",
    "TRPC",
];

const PROJECT_NAMES: [&str; 40] = [
    "Flux", "Nexus", "Vertex", "Pulse", "Zenith", "Core", "Orbit", "Synergy", "Prism", "Echo",
    "Titan", "Nova", "Stellar", "Quantum", "Atom", "Bio", "Grid", "Frame", "Logic", "Vibe",
    "Shift", "Flow", "Wave", "Spark", "Edge", "Cloud", "Void", "Drift", "Aura", "Sphere",
    "Apex", "Base", "Vista", "Rise", "Link", "Snap", "Zoom", "Bolt", "Iron", "Solid",
];

/// Total number of entries in the fallback catalog.
pub const FALLBACK_CATALOG_LEN: usize = 40;

fn stock_image_url(index: u64) -> String {
    format!(
        "https://images.unsplash.com/photo-{}?auto=format&fit=crop&w=1200&q=80",
        1_550_000_000_000u64 + index * 987_654
    )
}

fn highlight(
    index: u128,
    title: &str,
    description: &str,
    category: Category,
    tags: &[&str],
    image_url: &str,
    created_at: NaiveDate,
) -> Project {
    Project {
        id: Uuid::from_u128(index),
        title: title.to_string(),
        description: description.to_string(),
        category,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        image_url: image_url.to_string(),
        demo_url: Some("#".to_string()),
        repo_url: Some("#".to_string()),
        featured: true,
        created_at,
    }
}

/// Build the full fallback catalog: three hand-written featured entries
/// followed by generated filler entries, 40 records in total.
pub fn fallback_catalog() -> Vec<Project> {
    let mut projects = vec![
        highlight(
            1,
            "Neon Nexus E-commerce",
            "A headless commerce engine with dynamic faceted filtering, persistent cart state, and an ultra-low-latency checkout flow.",
            Category::Ecommerce,
            &["Next.js", "TypeScript", "Tailwind CSS", "Stripe"],
            "https://images.unsplash.com/photo-1557821552-17105176677c?auto=format&fit=crop&w=1200&q=80",
            NaiveDate::from_ymd_opt(2024, 11, 15).unwrap(),
        ),
        highlight(
            2,
            "Quantum Analytics Grid",
            "A financial data-visualization suite rendering over 100k nodes with hardware-accelerated canvas components.",
            Category::Dashboard,
            &["React", "D3.js", "WebWorkers", "Zustand"],
            "https://images.unsplash.com/photo-1551288049-bbda0231f676?auto=format&fit=crop&w=1200&q=80",
            NaiveDate::from_ymd_opt(2024, 12, 10).unwrap(),
        ),
        highlight(
            3,
            "Aura AI Assistant",
            "An intelligent content-orchestration platform that drives multi-channel campaigns through Gemini 2.5.",
            Category::AiMl,
            &["Gemini API", "React 19", "Node.js", "Server Sent Events"],
            "https://images.unsplash.com/photo-1677442136019-21780ecad995?auto=format&fit=crop&w=1200&q=80",
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        ),
    ];

    for i in 4..=FALLBACK_CATALOG_LEN {
        let category = ALL_CATEGORIES[i % ALL_CATEGORIES.len()];
        let tech_count = 3 + (i % 3);
        let tags: Vec<String> = (0..tech_count)
            .map(|idx| TECHNOLOGIES[(i + idx * 7) % TECHNOLOGIES.len()].to_string())
            .collect();

        let name = PROJECT_NAMES[i - 1];

        projects.push(Project {
            id: Uuid::from_u128(i as u128),
            title: format!("{name} {category}"),
            description: "A high-performance module engineered around accessibility and SEO, part of a consolidated collection of scalable frontend solutions.".to_string(),
            category,
            tags: crate::project::dedup_tags(tags),
            image_url: stock_image_url(i as u64),
            demo_url: Some("#".to_string()),
            repo_url: Some("#".to_string()),
            featured: false,
            created_at: NaiveDate::from_ymd_opt(2024, 1 + (i as u32 % 12), 1 + (i as u32 % 28))
                .expect("generated date is always valid"),
        });
    }

    projects
}
