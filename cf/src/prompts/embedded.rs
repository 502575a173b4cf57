//! Embedded prompt templates
//!
//! Compiled into the binary. User-supplied text is substituted verbatim.

/// System prompt for the boost flow
pub const BOOST_SYSTEM: &str = "You are an expert idea catalyst and innovation consultant with 15+ years of experience across \
business, social impact, creative projects, and personal development. Your expertise spans \
Indian and global markets, understanding cultural nuances, resource constraints, and practical implementation. \
You help transform ANY type of idea - business, creative, social, personal, or technical - into \
actionable plans with realistic steps. You balance encouragement with brutal honesty, \
always concluding your responses completely without cutting off mid-sentence.";

/// User prompt for the boost flow. Variables: `idea`.
pub const BOOST_USER: &str = r#"Enhance and transform this idea: {{idea}}

Please provide a comprehensive analysis that MUST be concluded completely. Structure your response as follows:

🎯 **IDEA ASSESSMENT**
- Core strengths and unique value proposition
- Market/audience potential and timing analysis
- Realistic viability score (1-10 with reasoning)

✅ **VALIDATION ROADMAP**
- 3 specific ways to test this idea within 2 weeks
- Key questions to answer before investing time/money
- Success indicators to look for

🚀 **IMPLEMENTATION BLUEPRINT**
- Phase 1: Immediate next steps (Week 1-4)
- Phase 2: Building momentum (Month 2-6)
- Phase 3: Scaling/expanding (Month 6+)
- Budget estimates in INR where applicable

⚠️ **REALITY CHECK**
- Top 3 challenges that will definitely arise
- Common failure points and prevention strategies
- Honest timeline expectations

📈 **GROWTH STRATEGY**
- How to scale from prototype to impact
- Revenue models or sustainability approaches
- Strategic partnerships or resources in India

🎯 **SUCCESS METRICS**
- Key performance indicators to track
- Milestones for first 6 months
- When to pivot vs when to persist

CRITICAL: End with a compelling 2-line conclusion that motivates action while being realistic. Ensure your response is COMPLETE and doesn't cut off. Include specific Indian context, government schemes, local resources, and culturally relevant examples."#;

/// System prompt for the generate flow
pub const GENERATE_SYSTEM: &str = "You are a highly imaginative creative director who turns a domain and a few \
hints into one fresh, concrete idea. Be specific, vivid, and practical. Answer in plain prose.";

/// User prompt for the generate flow. Variables: `domain`, `keywords` (optional), `style`.
pub const GENERATE_USER: &str = "Generate a {{style}} idea in the domain of {{domain}}\
{{#if keywords}} that incorporates these keywords: {{keywords}}{{/if}}. \
Describe it in 3-4 sentences.";

/// Get embedded template by name
pub fn get_embedded(name: &str) -> Option<&'static str> {
    match name {
        "boost-system" => Some(BOOST_SYSTEM),
        "boost-user" => Some(BOOST_USER),
        "generate-system" => Some(GENERATE_SYSTEM),
        "generate-user" => Some(GENERATE_USER),
        _ => None,
    }
}

/// Names of every embedded template
pub const TEMPLATE_NAMES: &[&str] = &["boost-system", "boost-user", "generate-system", "generate-user"];
