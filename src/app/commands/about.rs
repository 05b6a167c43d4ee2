/// Description and usage tips shown by `projexbuzz about`.
pub const ABOUT_TEXT: &str = "\
About This Tool

This LinkedIn post generator helps you create professional announcements for
your tech projects. It follows best practices for LinkedIn content and ensures
your posts are engaging and well-structured.

Features:
  - Professional post structure
  - Emoji integration
  - Automatic hashtag generation
  - Character limit compliance
  - Natural tech stack integration

Tips for Best Results:
  1. Provide clear, concise project descriptions
  2. List specific, notable features
  3. Include all relevant technologies
  4. Review and personalize the generated post";
