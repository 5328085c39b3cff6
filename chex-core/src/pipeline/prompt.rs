//! The instruction document sent to the model. Field labels and their order
//! here must stay in step with the label constants in the `parse` module.

use crate::pipeline::parse::{
    LABEL_EVIDENCE, LABEL_REASONING, LABEL_SCORE, LABEL_VERDICT, LABEL_WARNINGS,
};

pub fn build_prompt(claim: &str, context: &str) -> String {
    format!(
        "You are a fact-checking assistant.\n\
\n\
Your task is to verify the truthfulness of a claim using context from live web search results. \
Base your reasoning only on the context provided.\n\
\n\
\u{26a0}\u{fe0f} Note: Some snippets may contain unverified or contradictory information. \
Prioritize clear, reliable, and confirmed statements over vague or conflicting ones.\n\
\n\
Return your answer in the following format:\n\
\n\
{LABEL_VERDICT}: <REAL / FAKE / UNKNOWN>\n\
{LABEL_SCORE}: <0 to 100 \u{2014} how confident you are the claim is true>\n\
{LABEL_REASONING}: <Explain your answer using the evidence.>\n\
{LABEL_EVIDENCE}: <Cite specific statements from the context.>\n\
{LABEL_WARNINGS} (if any): <Mention if context is weak, outdated, or conflicting.>\n\
\n\
Claim:\n\
\"{claim}\"\n\
\n\
Context:\n\
{context}"
    )
    .trim()
    .to_string()
}
