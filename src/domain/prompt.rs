//! Fixed prompt templates for the two generation paths.
//!
//! Each template is a pure function of its request. The format instructions
//! they carry (heading markers, the 30-hashtag count) are advisory only: the
//! boundary is free to ignore them, and downstream consumers render whatever
//! comes back.

use crate::domain::{GuideRequest, HashtagRequest};

/// Assemble the guide prompt.
///
/// Embeds title and description verbatim and asks for structured prose with
/// `##`/`###` headings, bullet lists, and `**bold**` emphasis. The title line
/// is deliberately excluded from the output since the caller displays it.
pub fn guide_prompt(request: &GuideRequest) -> String {
    format!(
        "You are an expert social media marketing strategist and content creator.\n\
         Your goal is to provide an in-depth, practical, and easy-to-understand guide for a digital product customer.\n\
         \n\
         The guide title is: \"{title}\"\n\
         The guide's brief description is: \"{description}\"\n\
         \n\
         Please write a comprehensive guide based on this. The guide should be structured with:\n\
         1. A catchy introduction explaining the importance of the topic.\n\
         2. Clear sections with headings (use markdown ## for main headings and ### for subheadings).\n\
         3. Actionable tips, strategies, and step-by-step instructions.\n\
         4. Use bullet points (using - or *) for lists.\n\
         5. Use bold markdown (**text**) for emphasis on key terms.\n\
         6. Conclude with a summary of key takeaways.\n\
         \n\
         The tone should be encouraging, insightful, and professional. Do not include a title at the top, as it's already displayed on the page.",
        title = request.title,
        description = request.description,
    )
}

/// Assemble the hashtag prompt.
///
/// Asks for exactly 30 `#`-prefixed tokens, comma-and-space separated, with
/// no surrounding prose or numbering.
pub fn hashtag_prompt(request: &HashtagRequest) -> String {
    format!(
        "You are a viral social media expert specializing in Instagram Reels and TikTok. \
         Your task is to generate a list of exactly 30 high-reach, trending, and relevant hashtags for a social media reel.\n\
         \n\
         The topic for the reel is: \"{topic}\"\n\
         \n\
         Please provide hashtags that have millions of views and are currently popular. The list must be ready to copy and paste.\n\
         \n\
         Format the output as a single block of text. Each hashtag must start with '#' and be separated by a comma and a space. \
         Do not include any other text, titles, explanations, or numbering.",
        topic = request.topic(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guide_prompt_embeds_title_and_description_verbatim() {
        let request = GuideRequest::new("Algorithm Secrets", "How the feed really ranks reels");
        let prompt = guide_prompt(&request);

        assert!(prompt.contains("The guide title is: \"Algorithm Secrets\""));
        assert!(prompt.contains("\"How the feed really ranks reels\""));
        assert!(prompt.contains("Do not include a title at the top"));
    }

    #[test]
    fn guide_prompt_requests_the_markers_the_converter_understands() {
        let prompt = guide_prompt(&GuideRequest::new("t", "d"));

        assert!(prompt.contains("## for main headings"));
        assert!(prompt.contains("### for subheadings"));
        assert!(prompt.contains("(**text**)"));
        assert!(prompt.contains("using - or *"));
    }

    #[test]
    fn hashtag_prompt_embeds_topic_and_count() {
        let request = HashtagRequest::new("fitness motivation").unwrap();
        let prompt = hashtag_prompt(&request);

        assert!(prompt.contains("The topic for the reel is: \"fitness motivation\""));
        assert!(prompt.contains("exactly 30"));
        assert!(prompt.contains("separated by a comma and a space"));
    }
}
