//! Workflow-evolution infographic data: how the studio's delivery
//! process changed from manual work to an agent-assisted pipeline.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct WorkflowFeatures {
    pub agents: u32,
    pub phases: u32,
    pub mcp_servers: u32,
    pub hooks: u32,
    pub test_coverage: u32,
    pub security_bugs: &'static str,
    pub code_quality: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct WorkflowPhase {
    pub name: &'static str,
    pub ai_coverage: u32,
    pub description: &'static str,
    pub examples: &'static [&'static str],
}

/// One generation of the delivery workflow.
#[derive(Debug, Clone, Serialize)]
pub struct WorkflowVersion {
    pub id: &'static str,
    pub name: &'static str,
    pub efficiency: u32,
    pub time_per_feature: &'static str,
    pub description: &'static str,
    pub features: WorkflowFeatures,
    pub phases: Vec<WorkflowPhase>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AiAgent {
    pub id: &'static str,
    pub name: &'static str,
    pub role: &'static str,
    pub capabilities: &'static [&'static str],
}

#[derive(Debug, Clone, Serialize)]
pub struct McpServer {
    pub id: &'static str,
    pub name: &'static str,
    pub purpose: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct GitHook {
    pub id: &'static str,
    pub name: &'static str,
    pub trigger: &'static str,
    pub impact: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ImpactMetric {
    pub label: &'static str,
    pub value: u32,
    pub change: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct WorkflowEvolution {
    pub versions: Vec<WorkflowVersion>,
    pub agents: Vec<AiAgent>,
    pub mcp_servers: Vec<McpServer>,
    pub git_hooks: Vec<GitHook>,
    pub metrics: Vec<ImpactMetric>,
}

impl WorkflowEvolution {
    pub fn new() -> Self {
        WorkflowEvolution {
            versions: versions(),
            agents: agents(),
            mcp_servers: mcp_servers(),
            git_hooks: git_hooks(),
            metrics: metrics(),
        }
    }
}

impl Default for WorkflowEvolution {
    fn default() -> Self {
        WorkflowEvolution::new()
    }
}

fn versions() -> Vec<WorkflowVersion> {
    vec![
        WorkflowVersion {
            id: "v0",
            name: "Manual Workflow",
            efficiency: 20,
            time_per_feature: "12 hours",
            description: "Traditional development with manual reviews, testing and deployment.",
            features: WorkflowFeatures {
                agents: 0,
                phases: 3,
                mcp_servers: 0,
                hooks: 1,
                test_coverage: 45,
                security_bugs: "12/year",
                code_quality: "Manual",
            },
            phases: vec![
                WorkflowPhase {
                    name: "Plan",
                    ai_coverage: 0,
                    description: "Manual requirement gathering and planning",
                    examples: &["Spreadsheet tracking", "Email threads", "Manual estimates"],
                },
                WorkflowPhase {
                    name: "Build",
                    ai_coverage: 0,
                    description: "Manual coding with basic IDE support",
                    examples: &["Standard IDE", "Manual formatting", "Web search for fixes"],
                },
                WorkflowPhase {
                    name: "Test",
                    ai_coverage: 0,
                    description: "Manual testing and bug fixes",
                    examples: &["Manual QA", "Ad-hoc API testing", "Manual regression runs"],
                },
            ],
        },
        WorkflowVersion {
            id: "v1",
            name: "Semi-Automated",
            efficiency: 60,
            time_per_feature: "4 hours",
            description: "Automation tools, CI/CD pipelines and basic code analysis.",
            features: WorkflowFeatures {
                agents: 4,
                phases: 6,
                mcp_servers: 0,
                hooks: 2,
                test_coverage: 78,
                security_bugs: "3/year",
                code_quality: "Semi-auto",
            },
            phases: vec![
                WorkflowPhase {
                    name: "Plan",
                    ai_coverage: 30,
                    description: "Project management tools with templates",
                    examples: &["Issue automation", "Template planning", "Basic analytics"],
                },
                WorkflowPhase {
                    name: "Design",
                    ai_coverage: 40,
                    description: "Design systems and component libraries",
                    examples: &["Design tokens", "Component docs", "Shared templates"],
                },
                WorkflowPhase {
                    name: "Build",
                    ai_coverage: 50,
                    description: "IDE extensions and code snippets",
                    examples: &["Linting", "Formatting", "Snippet libraries"],
                },
                WorkflowPhase {
                    name: "Test",
                    ai_coverage: 70,
                    description: "Automated unit and integration tests",
                    examples: &["Unit runners", "Browser tests", "CI pipelines"],
                },
                WorkflowPhase {
                    name: "Review",
                    ai_coverage: 40,
                    description: "PR templates and basic static analysis",
                    examples: &["CI checks", "Static analysis", "PR templates"],
                },
                WorkflowPhase {
                    name: "Deploy",
                    ai_coverage: 80,
                    description: "Automated deployments",
                    examples: &["Containers", "Orchestration", "Auto-deploy"],
                },
            ],
        },
        WorkflowVersion {
            id: "v2",
            name: "Agent-Assisted",
            efficiency: 95,
            time_per_feature: "90 minutes",
            description: "Twelve agents cover planning, design, development, testing and deployment.",
            features: WorkflowFeatures {
                agents: 12,
                phases: 8,
                mcp_servers: 4,
                hooks: 4,
                test_coverage: 98,
                security_bugs: "0/year",
                code_quality: "Agent-enforced",
            },
            phases: vec![
                WorkflowPhase {
                    name: "Plan",
                    ai_coverage: 95,
                    description: "Requirements analyzed into detailed plans",
                    examples: &["Planner agent", "Task breakdown", "Effort estimates"],
                },
                WorkflowPhase {
                    name: "Design",
                    ai_coverage: 100,
                    description: "Generated design specifications",
                    examples: &["Designer agent", "Component specs", "Accessibility checks"],
                },
                WorkflowPhase {
                    name: "Build",
                    ai_coverage: 85,
                    description: "Generated code with enforced conventions",
                    examples: &["Builder agent", "Auto imports", "Type safety"],
                },
                WorkflowPhase {
                    name: "Test",
                    ai_coverage: 100,
                    description: "Generated test suites",
                    examples: &["Testing agent", "98% coverage", "End-to-end runs"],
                },
                WorkflowPhase {
                    name: "Review",
                    ai_coverage: 100,
                    description: "Multi-agent code review",
                    examples: &["Reviewer agent", "Security scan", "Performance audit"],
                },
                WorkflowPhase {
                    name: "Document",
                    ai_coverage: 100,
                    description: "Documentation generated alongside code",
                    examples: &["Docs agent", "API references", "Changelogs"],
                },
                WorkflowPhase {
                    name: "Optimize",
                    ai_coverage: 90,
                    description: "Profiling-driven optimization passes",
                    examples: &["Optimizer agent", "Bundle analysis", "Query tuning"],
                },
                WorkflowPhase {
                    name: "Deploy",
                    ai_coverage: 100,
                    description: "Verified, gated deployments",
                    examples: &["DevOps agent", "Canary rollout", "Auto rollback"],
                },
            ],
        },
    ]
}

fn agents() -> Vec<AiAgent> {
    vec![
        AiAgent {
            id: "project-planner",
            name: "Project Planner",
            role: "Strategic planning",
            capabilities: &["Task breakdown", "Effort estimation", "Dependency mapping"],
        },
        AiAgent {
            id: "ux-designer",
            name: "UX Designer",
            role: "User experience",
            capabilities: &["Component specs", "Flow diagrams", "Accessibility review"],
        },
        AiAgent {
            id: "feature-builder",
            name: "Feature Builder",
            role: "Development",
            capabilities: &["Implementation", "Refactoring", "Convention enforcement"],
        },
        AiAgent {
            id: "testing-specialist",
            name: "Testing Specialist",
            role: "Quality assurance",
            capabilities: &["Unit tests", "Integration tests", "Coverage analysis"],
        },
        AiAgent {
            id: "code-reviewer",
            name: "Code Reviewer",
            role: "Quality control",
            capabilities: &["Defect detection", "Style review", "Simplification"],
        },
        AiAgent {
            id: "documentation-writer",
            name: "Documentation Writer",
            role: "Technical writing",
            capabilities: &["API references", "Guides", "Changelogs"],
        },
        AiAgent {
            id: "performance-optimizer",
            name: "Performance Optimizer",
            role: "Optimization",
            capabilities: &["Profiling", "Bundle analysis", "Query tuning"],
        },
        AiAgent {
            id: "security-auditor",
            name: "Security Auditor",
            role: "Security",
            capabilities: &["Dependency audit", "Input validation", "Secrets scanning"],
        },
        AiAgent {
            id: "devops-engineer",
            name: "DevOps Engineer",
            role: "Infrastructure",
            capabilities: &["Pipelines", "Rollouts", "Monitoring"],
        },
        AiAgent {
            id: "accessibility-auditor",
            name: "Accessibility Auditor",
            role: "Accessibility",
            capabilities: &["WCAG checks", "Keyboard flows", "Contrast review"],
        },
        AiAgent {
            id: "api-integrator",
            name: "API Integrator",
            role: "Integration",
            capabilities: &["Client generation", "Contract tests", "Error mapping"],
        },
        AiAgent {
            id: "database-architect",
            name: "Database Architect",
            role: "Data management",
            capabilities: &["Schema design", "Migrations", "Index tuning"],
        },
    ]
}

fn mcp_servers() -> Vec<McpServer> {
    vec![
        McpServer {
            id: "reasoning-mcp",
            name: "Reasoning MCP",
            purpose: "Structured multi-step problem solving",
        },
        McpServer {
            id: "github-mcp",
            name: "GitHub MCP",
            purpose: "Repository management and version control",
        },
        McpServer {
            id: "tracker-mcp",
            name: "Tracker MCP",
            purpose: "Project management and issue tracking",
        },
        McpServer {
            id: "postgres-mcp",
            name: "PostgreSQL MCP",
            purpose: "Database operations and schema management",
        },
    ]
}

fn git_hooks() -> Vec<GitHook> {
    vec![
        GitHook {
            id: "pre-commit",
            name: "Pre-commit",
            trigger: "Before every commit",
            impact: "Formatting and lint issues never reach the branch",
        },
        GitHook {
            id: "commit-msg",
            name: "Commit message",
            trigger: "On commit message creation",
            impact: "History stays searchable and release notes generate cleanly",
        },
        GitHook {
            id: "pre-push",
            name: "Pre-push",
            trigger: "Before pushing to a shared branch",
            impact: "Broken test suites stay local",
        },
        GitHook {
            id: "post-merge",
            name: "Post-merge",
            trigger: "After merging into main",
            impact: "Dependencies and migrations apply without manual steps",
        },
    ]
}

fn metrics() -> Vec<ImpactMetric> {
    vec![
        ImpactMetric {
            label: "Delivery speed",
            value: 8,
            change: "8x faster feature delivery",
        },
        ImpactMetric {
            label: "Test coverage",
            value: 98,
            change: "45% → 98%",
        },
        ImpactMetric {
            label: "Security findings",
            value: 0,
            change: "12/year → 0/year",
        },
        ImpactMetric {
            label: "Release cadence",
            value: 30,
            change: "Monthly → daily releases",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn versions_are_ordered_by_efficiency() {
        let versions = versions();
        for pair in versions.windows(2) {
            assert!(pair[0].efficiency < pair[1].efficiency);
        }
    }

    #[test]
    fn feature_counts_match_tables() {
        let evolution = WorkflowEvolution::new();
        let latest = evolution.versions.last().expect("versions");
        assert_eq!(latest.features.agents as usize, evolution.agents.len());
        assert_eq!(latest.features.mcp_servers as usize, evolution.mcp_servers.len());
        assert_eq!(latest.features.hooks as usize, evolution.git_hooks.len());
    }

    #[test]
    fn phase_counts_match_features() {
        for version in versions() {
            assert_eq!(version.features.phases as usize, version.phases.len());
        }
    }
}
