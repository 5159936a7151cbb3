//! Prompt and system-instruction construction.
//!
//! The model has no memory between turns, so a modification request re-sends
//! every current file verbatim, labeled, and fenced, followed by the user's
//! instruction and the complete-files directive. Builders are pure functions
//! over the file set and a [`PromptProfile`].

use crate::domain::FileRecord;
use serde::{Deserialize, Serialize};

/// Named pieces of the fixed system instruction.
///
/// Assembled once at startup and passed into the session explicitly; config
/// files may override individual fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptProfile {
    /// Who the model is told it is.
    pub persona: String,
    /// Rules injected only on modification cycles.
    pub modification_rules: String,
    /// Note injected only on creation cycles.
    pub creation_note: String,
    /// Separate-files requirements.
    pub file_structure_rules: String,
    /// Visual/design constraints.
    pub design_rules: String,
    /// Vanilla-web technical constraints.
    pub technical_rules: String,
    /// The fenced-filename response format the extractor parses best.
    pub response_format: String,
}

impl Default for PromptProfile {
    fn default() -> Self {
        Self {
            persona: PERSONA.to_string(),
            modification_rules: MODIFICATION_RULES.to_string(),
            creation_note: CREATION_NOTE.to_string(),
            file_structure_rules: FILE_STRUCTURE_RULES.to_string(),
            design_rules: DESIGN_RULES.to_string(),
            technical_rules: TECHNICAL_RULES.to_string(),
            response_format: RESPONSE_FORMAT.to_string(),
        }
    }
}

const PERSONA: &str = "You are an expert web developer and designer that creates modern, \
beautiful websites using HTML, CSS, and JavaScript only.";

const MODIFICATION_RULES: &str = "IMPORTANT: You are modifying an existing project. The current \
code has been provided in the prompt.

MODIFICATION RULES:
- You MUST read and understand the existing code structure completely
- Keep ALL existing functionality unless explicitly asked to remove it
- Maintain the current design, layout, and styling unless asked to change them
- Only modify the specific elements requested by the user
- Always provide complete files in your response (HTML, CSS, JS)
- Ensure all modifications integrate seamlessly with existing code
- Test that your changes don't break existing functionality

Your response must include all project files, not just the modified parts.";

const CREATION_NOTE: &str =
    "CREATION MODE: Create a new website from scratch based on the user's requirements.";

const FILE_STRUCTURE_RULES: &str = "CRITICAL FILE STRUCTURE REQUIREMENTS:
- ALWAYS create separate files for HTML, CSS, and JavaScript
- NEVER put CSS or JavaScript inline in HTML files
- ALWAYS use external file references (e.g., <link rel=\"stylesheet\" href=\"styles.css\"> and <script src=\"script.js\"></script>)
- Generate multiple separate code blocks, one for each file";

const DESIGN_RULES: &str = "DESIGN REQUIREMENTS:
- Create visually stunning, modern designs with clean aesthetics
- Use contemporary design trends: gradients, glassmorphism, smooth animations, subtle shadows
- Implement responsive layouts that work perfectly on mobile, tablet, and desktop
- Use modern CSS features: CSS Grid, Flexbox, custom properties, transitions, transforms
- Include hover effects, smooth animations, and micro-interactions
- Use beautiful color schemes and typography (Google Fonts are acceptable)
- Add proper spacing, visual hierarchy, and modern UI patterns
- Use a neon green/cyan color scheme (primary: #11b981, accent: cyan-400)";

const TECHNICAL_RULES: &str = "TECHNICAL REQUIREMENTS:
- Generate ONLY plain HTML, CSS, and JavaScript files
- NO React, Vue, Angular, or any other frameworks
- NO JSX syntax or component-based code
- Use modern vanilla JavaScript (ES6+) for interactivity
- Include semantic HTML5 elements
- Ensure accessibility best practices
- Make it fast-loading and performant";

const RESPONSE_FORMAT: &str = r#"REQUIRED RESPONSE FORMAT:
You MUST structure your response exactly like this:

```index.html
<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Your Title</title>
    <link rel="stylesheet" href="styles.css">
</head>
<body>
    <!-- Your HTML content -->
    <script src="script.js"></script>
</body>
</html>
```

```styles.css
/* Your complete CSS styles here */
```

```script.js
// Your complete JavaScript functionality here
```

Remember: Create separate, complete files that work together when downloaded and run locally."#;

const MODIFICATION_DIRECTIVE: &str = "Please modify the above code according to the user's \
request. You MUST provide all files (HTML, CSS, JS) in your response, even if only some files \
are being modified. Base your changes on the existing code structure and maintain consistency.";

/// Build the user-role payload for one generation request.
///
/// Empty file set: the instruction passes through untouched. Otherwise the
/// full content of every file is embedded, each labeled with its name and
/// fenced with its language, before the instruction and the complete-files
/// directive.
pub fn build_user_prompt(files: &[FileRecord], instruction: &str) -> String {
    if files.is_empty() {
        return instruction.to_string();
    }

    let mut prompt = String::from(
        "You are modifying an existing website. Here are the current project files:\n\n",
    );

    let sections: Vec<String> = files
        .iter()
        .map(|file| {
            format!(
                "=== {} ===\n```{}\n{}\n```",
                file.name.to_uppercase(),
                file.language,
                file.content
            )
        })
        .collect();
    prompt.push_str(&sections.join("\n\n"));

    prompt.push_str(&format!("\n\nUSER REQUEST: {instruction}\n\n{MODIFICATION_DIRECTIVE}"));
    prompt
}

/// Assemble the system instruction for a creation or modification cycle.
pub fn build_system_instruction(profile: &PromptProfile, modifying: bool) -> String {
    let mode_section =
        if modifying { &profile.modification_rules } else { &profile.creation_note };

    [
        profile.persona.as_str(),
        mode_section.as_str(),
        profile.file_structure_rules.as_str(),
        profile.design_rules.as_str(),
        profile.technical_rules.as_str(),
        profile.response_format.as_str(),
    ]
    .iter()
    .filter(|section| !section.is_empty())
    .copied()
    .collect::<Vec<_>>()
    .join("\n\n")
}
