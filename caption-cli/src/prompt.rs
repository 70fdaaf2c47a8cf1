//! Default caption prompt

/// Builds the prompt used when `--prompt` is not given
pub fn default_prompt(title_count: u32, content_count: u32) -> String {
    format!(
        r#"Describe the image and reply strictly in the format below:

Title: [at most {title_count} words, including the specific location]
Description: [at most {content_count} words, covering time, place, main people or subject, and the action or event]

Output rules:
1. Base everything on what the image shows; do not invent or guess
2. Be specific about time (for example "spring 2023" or "last Wednesday afternoon"); when unsure, use a general term such as "recently" or "one autumn day"
3. Name the place down to a city or a clear venue (for example "Tiananmen Square, Beijing" or "a residential garden"); when the place cannot be identified, describe the setting instead (for example "a crowded market")
4. Describe people only as far as they are clearly visible; do not invent identities
5. Add no subjective judgement, rhetoric or extra explanation
6. Keep strictly to the length limits above
7. If the image is a photograph or painting of high artistic value, give a deeper appreciation and analysis

Example:
Title: Beijing sees first snowfall of the year
Description: Recently, Beijing saw its first snowfall of the year. The image shows residents walking along streets covered in snow.

Output only the title line and the description line, with no other text:"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_are_injected() {
        let prompt = default_prompt(12, 48);
        assert!(prompt.contains("Title: [at most 12 words"));
        assert!(prompt.contains("Description: [at most 48 words"));
    }

    #[test]
    fn prompt_ends_with_output_instruction() {
        assert!(default_prompt(20, 30).ends_with("with no other text:"));
    }
}
