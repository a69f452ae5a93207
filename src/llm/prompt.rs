/// Which report layout to ask the model for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Template {
    /// Short bullet list of things to extract
    Terse,
    /// Eight-section structured report
    Structured,
}

impl Template {
    pub fn as_str(&self) -> &'static str {
        match self {
            Template::Terse => "terse",
            Template::Structured => "structured",
        }
    }
}

/// Renders the analysis prompt for one script.
///
/// The label and content are embedded verbatim: nothing is escaped or
/// truncated, however large the script is.
pub fn build_prompt(template: Template, content: &str, source_label: &str) -> String {
    let preamble = match template {
        Template::Terse => TERSE_PREAMBLE,
        Template::Structured => STRUCTURED_PREAMBLE,
    };

    format!(
        "{}\nSource: {}\n\nCode:\n```javascript\n{}\n```\n",
        preamble, source_label, content
    )
}

const TERSE_PREAMBLE: &str = r#"You are a professional bug bounty hunter.

Analyze this JavaScript and extract:

- functionality summary
- all URLs
- API endpoints
- subdomains
- paths
- hardcoded secrets
- authentication logic
- vulnerabilities
- attack surface
"#;

const STRUCTURED_PREAMBLE: &str = r#"You are an experienced security researcher doing a bug bounty
assessment of a JavaScript file.

Analyze the code below and write a report with exactly these sections:

1. FUNCTIONALITY SUMMARY
   What the script does and which application features it backs.

2. ENDPOINTS
   Every API endpoint, with HTTP method and the function that calls it.

3. URLS AND SUBDOMAINS
   Every absolute URL, host and subdomain referenced.

4. PARAMETERS AND DATA FLOW
   Request parameters, headers and bodies, and where user-controlled data flows.

5. HARDCODED SECRETS
   API keys, tokens, credentials or internal identifiers in the source.

6. AUTHENTICATION LOGIC
   How sessions, tokens and authorization checks are handled client-side.

7. VULNERABILITIES
   Concrete issues (XSS sinks, open redirects, IDOR candidates, insecure storage,
   prototype pollution, etc.) with the code that shows them.

8. ATTACK SURFACE SUMMARY
   The most promising targets for manual testing, highest value first.

Write "None found" under any section with nothing to report.
"#;
