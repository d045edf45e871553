//! Compiled-in site content.
//!
//! The landing page renders these tables top to bottom; nothing here is
//! persisted or mutated at runtime.

pub mod workflow;

use serde::Serialize;

use crate::content::workflow::WorkflowEvolution;

#[derive(Debug, Clone, Serialize)]
pub struct Hero {
    pub title: &'static str,
    pub tagline: &'static str,
}

/// One "how we work" blurb in the lab-strategy section.
#[derive(Debug, Clone, Serialize)]
pub struct StrategyPillar {
    pub title: &'static str,
    pub description: &'static str,
}

/// Project showcase card: problem, solution, stack, outbound links.
#[derive(Debug, Clone, Serialize)]
pub struct Project {
    pub title: &'static str,
    pub problem: &'static str,
    pub solution: &'static str,
    pub tech_stack: &'static [&'static str],
    pub app_url: Option<&'static str>,
    pub repo_url: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StackItem {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Founder {
    pub name: &'static str,
    pub role: &'static str,
    pub bio: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContactLink {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct SiteContent {
    pub hero: Hero,
    pub strategy: Vec<StrategyPillar>,
    pub projects: Vec<Project>,
    pub stack: Vec<StackItem>,
    pub workflow: WorkflowEvolution,
    pub founder: Founder,
    pub contact: Vec<ContactLink>,
}

impl SiteContent {
    pub fn new() -> Self {
        SiteContent {
            hero: Hero {
                title: "Lichtwerk Labs",
                tagline: "We build small, sharp software — and test in production so you don't have to.",
            },
            strategy: vec![
                StrategyPillar {
                    title: "Pre-hype adoption",
                    description: "Identify and apply new tech early, before the ecosystem settles.",
                },
                StrategyPillar {
                    title: "Speed",
                    description: "Rapid validation, lean prototyping, frequent releases.",
                },
                StrategyPillar {
                    title: "Modularity",
                    description: "Agent-based architectures tailored to each product's context.",
                },
                StrategyPillar {
                    title: "Production-first",
                    description: "Live testing and iteration from day one.",
                },
            ],
            projects: vec![
                Project {
                    title: "Runenpfad",
                    problem: "Trail runners plan routes across half a dozen disconnected map tools.",
                    solution: "One route planner with elevation-aware pacing and offline export.",
                    tech_stack: &["React", "TypeScript", "PostgreSQL"],
                    app_url: Some("https://runenpfad.lichtwerk.dev"),
                    repo_url: None,
                },
                Project {
                    title: "Massgut",
                    problem: "Small wholesalers track bulk orders in spreadsheets that drift apart.",
                    solution: "A shared order book with live stock levels and dispatch planning.",
                    tech_stack: &["Next.js", "Prisma", "PostgreSQL"],
                    app_url: Some("https://massgut.lichtwerk.dev"),
                    repo_url: None,
                },
                Project {
                    title: "Product Copilot",
                    problem: "Product discovery notes end up scattered across docs and chats.",
                    solution: "A development copilot that turns discovery notes into ranked backlogs.",
                    tech_stack: &["React", "Node.js", "OpenAPI"],
                    app_url: None,
                    repo_url: Some("https://github.com/lichtwerk-labs/product-copilot"),
                },
            ],
            stack: vec![
                StackItem {
                    title: "React + TypeScript",
                    description: "Type-safe frontend",
                },
                StackItem {
                    title: "Next.js App Router",
                    description: "Server-side rendering",
                },
                StackItem {
                    title: "PostgreSQL + Prisma",
                    description: "Type-safe database",
                },
                StackItem {
                    title: "Docker Containers",
                    description: "Isolated environments",
                },
                StackItem {
                    title: "Hetzner Cloud VPS",
                    description: "Staging + production",
                },
                StackItem {
                    title: "GitHub Actions CI/CD",
                    description: "Automated deployments",
                },
                StackItem {
                    title: "ESLint + TS Strict",
                    description: "Code quality gates",
                },
                StackItem {
                    title: "GlitchTip + Umami",
                    description: "Error tracking + analytics",
                },
            ],
            workflow: WorkflowEvolution::new(),
            founder: Founder {
                name: "R. Weber",
                role: "Founder & Engineer",
                bio: "Builds products end to end, from first sketch to the pager duty \
                    that follows. Previously shipped logistics and mapping software \
                    for teams of one to one hundred.",
            },
            contact: vec![
                ContactLink {
                    label: "Email",
                    href: "mailto:hello@lichtwerk.dev",
                },
                ContactLink {
                    label: "LinkedIn",
                    href: "https://www.linkedin.com/company/lichtwerk-labs",
                },
                ContactLink {
                    label: "GitHub",
                    href: "https://github.com/lichtwerk-labs",
                },
            ],
        }
    }
}

impl Default for SiteContent {
    fn default() -> Self {
        SiteContent::new()
    }
}
