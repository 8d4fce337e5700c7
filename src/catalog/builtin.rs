//! Builtin snippet set, embedded as TOML documents
//!
//! One document per category group, parsed once by [`Catalog::builtin`]
//! (see `super`). The content tests lint every document, so authoring
//! mistakes (undeclared tokens, broken choice defaults) fail the build,
//! not the user.

/// Session setup and project analysis
const START: &str = r#"
[[snippets]]
id = "session-start"
name = "Session Start"
description = "Kick off a new coding-agent session with project ground rules"
category = "start"
icon = "🚀"
template = '''
Hi! Before we start:

- Read DEVELOPMENT.md for the architecture guidelines
- This project follows a strictly modular layout
- Only change files that are explicitly named

Confirm briefly that the rules are clear, then we begin.
'''
long_description = "Establishes the working agreement at the top of a fresh session: which guideline file to read, how the codebase is organized, and that unrequested edits are off limits. Sending it first makes every later prompt shorter."
when_to_use = "At the start of every new session, before the first real task. Not needed when continuing in the same session."
use_case = "You open your editor in the morning and start a new session. Before building features or fixing bugs you send this prompt, so the agent has read your guidelines and respects your architecture rules."

[[snippets]]
id = "project-analysis"
name = "Project Analysis"
description = "Have the project structure, stack, and conventions analyzed"
category = "start"
icon = "🔍"
template = '''
Please analyze this project thoroughly so follow-up work lands well.

Analysis focus: {{analysis_focus}}

1. Structure: main directories, how code is organized, recurring patterns.
2. Stack: language, build tooling, test framework, notable libraries.
3. Conventions: naming, file layout, error handling style.
4. Main features and how they connect.

Specific areas to look at:
{{specific_areas}}

Summarize your findings compactly before proposing anything.
'''

[[snippets.fields]]
id = "analysis_focus"
label = "Analysis focus"
kind = "line"
required = true
placeholder = "e.g. architecture, test coverage, onboarding"
default = "architecture"

[[snippets.fields]]
id = "specific_areas"
label = "Specific areas"
kind = "list"
placeholder = "src/parser"

[[snippets.guide]]
field = "analysis_focus"
explanation = "The one aspect the analysis should prioritize"
example = "architecture"
tips = "Keep it to a single theme; run the snippet again for a second pass"

[[snippets.guide]]
field = "specific_areas"
explanation = "Paths or modules that deserve a closer look"
example = "src/parser"
"#;

/// Feature work, bug fixing, refactoring
const DEVELOPMENT: &str = r#"
[[snippets]]
id = "quick-task"
name = "Quick Task"
description = "Small well-scoped task with explicit boundaries"
category = "other"
icon = "⚡"
template = '''
Task: {{task}}

Scope: {{scope}}

Details:
{{details}}

Stay inside the scope; ask before touching anything else.
'''

[[snippets.fields]]
id = "task"
label = "Task"
kind = "line"
required = true
placeholder = "e.g. Fix the flaky login test"

[[snippets.fields]]
id = "scope"
label = "Scope"
kind = "line"
default = "only the files named below"

[[snippets.fields]]
id = "details"
label = "Details"
kind = "list"
placeholder = "one detail per line"

[[snippets.guide]]
field = "task"
explanation = "One sentence describing what should be done"
example = "Fix the flaky login test"
tips = "If you need two sentences, it is probably two tasks"

[[snippets]]
id = "new-component"
name = "New Component"
description = "Scaffold a new UI component with props and features"
category = "component"
icon = "🧩"
template = '''
Create a new component: {{component_name}}

Location: {{folder}}/{{component_name}}/

Props:
{{props}}

Features:
{{features}}

Follow the existing component conventions (types in a separate file,
barrel export). New files only, do not modify existing ones.
'''

[[snippets.fields]]
id = "component_name"
label = "Component name"
kind = "line"
required = true
placeholder = "e.g. UserCard"

[[snippets.fields]]
id = "folder"
label = "Parent folder"
kind = "line"
default = "src/components"

[[snippets.fields]]
id = "props"
label = "Props definition"
kind = "block"
placeholder = "name: string, onSelect: callback"

[[snippets.fields]]
id = "features"
label = "Features"
kind = "list"
required = true
placeholder = "one feature per line"

[[snippets.guide]]
field = "component_name"
explanation = "Name of the component, matching your project naming style"
example = "UserCard"

[[snippets.guide]]
field = "features"
explanation = "Observable behaviors the component must have"
example = "shows avatar and display name"
tips = "Write them as acceptance criteria, one per line"

[[snippets]]
id = "bug-fix"
name = "Bug Fix"
description = "Structured bug report with reproduction and severity"
category = "fix"
icon = "🐛"
template = '''
Bug in {{file_path}} (severity: {{severity}})

{{bug_description}}

Expected: {{expected}}
Actual: {{actual}}

Steps to reproduce:
{{steps}}

Find the root cause before changing anything, then fix it with the
smallest reasonable diff and add a regression test.
'''

[[snippets.fields]]
id = "file_path"
label = "Affected file or area"
kind = "line"
required = true
placeholder = "src/auth/login.rs"

[[snippets.fields]]
id = "severity"
label = "Severity"
kind = "choice"
required = true
options = ["low", "medium", "high", "critical"]
default = "medium"

[[snippets.fields]]
id = "bug_description"
label = "Description"
kind = "block"
required = true

[[snippets.fields]]
id = "expected"
label = "Expected behavior"
kind = "line"
required = true

[[snippets.fields]]
id = "actual"
label = "Actual behavior"
kind = "line"
required = true

[[snippets.fields]]
id = "steps"
label = "Reproduction steps"
kind = "list"
placeholder = "one step per line"

[[snippets.guide]]
field = "severity"
explanation = "How badly this blocks users"
example = "high"
tips = "critical = data loss or no workaround"

[[snippets.guide]]
field = "steps"
explanation = "Exact steps that trigger the bug, in order"
example = "log in with an expired token"

[[snippets]]
id = "refactor"
name = "Refactor"
description = "Behavior-preserving cleanup of a named area"
category = "refactor"
icon = "🛠"
template = '''
Refactor {{target_path}} for {{goal}}.

Constraints:
{{constraints}}

Behavior must not change: run the existing tests before and after, and
keep the public interface stable unless a constraint says otherwise.
'''

[[snippets.fields]]
id = "target_path"
label = "Target path"
kind = "line"
required = true
placeholder = "src/store/"

[[snippets.fields]]
id = "goal"
label = "Goal"
kind = "choice"
required = true
options = ["readability", "performance", "structure"]
default = "readability"

[[snippets.fields]]
id = "constraints"
label = "Constraints"
kind = "list"
placeholder = "no new dependencies"
"#;

/// API integration, testing, documentation
const TECHNICAL: &str = r#"
[[snippets]]
id = "api-integration"
name = "API Integration"
description = "Wire up a new HTTP endpoint with types and error handling"
category = "api"
icon = "🔌"
template = '''
API integration: {{api_name}}

Endpoint: {{method}} {{endpoint}}

Request shape:
{{request_type}}

Expected response shape:
{{response_type}}

Create a service function with typed request/response, proper error
handling, and a thin call-site wrapper. New files only.

Notes:
{{notes}}
'''

[[snippets.fields]]
id = "api_name"
label = "Service name"
kind = "line"
required = true
placeholder = "e.g. userService"

[[snippets.fields]]
id = "endpoint"
label = "Endpoint URL"
kind = "line"
required = true
placeholder = "https://api.example.com/users/:id"

[[snippets.fields]]
id = "method"
label = "HTTP method"
kind = "choice"
required = true
options = ["GET", "POST", "PUT", "DELETE", "PATCH"]
default = "GET"

[[snippets.fields]]
id = "request_type"
label = "Request type"
kind = "block"
placeholder = "id: string"

[[snippets.fields]]
id = "response_type"
label = "Response type"
kind = "block"
required = true

[[snippets.fields]]
id = "notes"
label = "Additional notes"
kind = "list"
placeholder = "caching, retry logic"

[[snippets.guide]]
field = "endpoint"
explanation = "Full URL of the endpoint, path parameters included"
example = "https://api.example.com/users/:id"
tips = "Keep the base URL in configuration, not in code"

[[snippets.guide]]
field = "method"
explanation = "HTTP method for this request"
example = "GET"

[[snippets]]
id = "test-coverage"
name = "Test Coverage"
description = "Add tests for a module, cases and edge cases listed up front"
category = "test"
icon = "🧪"
template = '''
Write tests for {{target_path}}.

Cases to cover:
{{cases}}

Edge cases:
{{edge_cases}}

Use the project's existing test tooling and file placement. Each test
asserts one behavior; no snapshot dumps of unrelated state.
'''

[[snippets.fields]]
id = "target_path"
label = "Module under test"
kind = "line"
required = true
placeholder = "src/form.rs"

[[snippets.fields]]
id = "cases"
label = "Cases"
kind = "list"
required = true
placeholder = "one case per line"

[[snippets.fields]]
id = "edge_cases"
label = "Edge cases"
kind = "list"
placeholder = "empty input"

[[snippets]]
id = "write-docs"
name = "Write Docs"
description = "Document a module for a chosen audience"
category = "docs"
icon = "📚"
template = '''
Document {{target_path}} for {{audience}}.

Sections to include:
{{sections}}

Match the tone and depth of the existing documentation. Examples must
be runnable as written.
'''

[[snippets.fields]]
id = "target_path"
label = "Target path"
kind = "line"
required = true

[[snippets.fields]]
id = "audience"
label = "Audience"
kind = "choice"
options = ["users", "contributors", "maintainers"]
default = "users"

[[snippets.fields]]
id = "sections"
label = "Sections"
kind = "list"
placeholder = "quick start"
"#;

/// Commit and release workflow
const WORKFLOW: &str = r#"
[[snippets]]
id = "commit-message"
name = "Commit Message"
description = "Draft a commit message from a list of changes"
category = "other"
icon = "✅"
template = '''
Draft a commit message for these changes:

{{changes}}

Ticket: {{ticket}}

One-line summary in the imperative, then a short body explaining why.
No attribution footers.
'''

[[snippets.fields]]
id = "changes"
label = "Changes"
kind = "list"
required = true
placeholder = "one change per line"

[[snippets.fields]]
id = "ticket"
label = "Ticket reference"
kind = "line"
placeholder = "PROJ-123"

[[snippets.guide]]
field = "changes"
explanation = "What actually changed, one item per line"
example = "extracted the retry loop into its own function"
"#;

/// Every embedded catalog document, in selector order
pub(crate) const DOCUMENTS: &[&str] = &[START, DEVELOPMENT, TECHNICAL, WORKFLOW];
