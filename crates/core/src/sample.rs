//! Built-in sample feedback used by the "load sample data" action.

pub const SAMPLE_REVIEWS: &str = r#""I love the sleek and modern design of the packaging. It really stands out on the shelf and makes the product look premium."
"The packaging is way too bulky and difficult to open. It's frustrating and feels like a waste of materials."
"I appreciate the eco-friendly packaging. It's great to see companies prioritizing sustainability."
"The packaging doesn't provide enough information about the product. I had to search online to find the details I needed."
"The color scheme and branding on the packaging are eye-catching and memorable. It definitely grabs my attention.""#;

pub const SAMPLE_SURVEYS: &str = r#""I prefer packaging that is easy to open and reseal. Convenience is key for me."
"I'm willing to pay a bit more for packaging that is environmentally friendly and recyclable."
"Clear and concise product information on the packaging is a must. I don't want to have to guess what I'm buying."
"Packaging that is reusable or has multiple purposes is a big plus in my book."
"I tend to gravitate towards packaging designs that are minimalist and clean-looking.""#;

pub const SAMPLE_SOCIAL: &str = r#""Just received my order, and I'm blown away by the stunning packaging design! It's almost too pretty to open. 😍 #unboxing #packaginggoals"
"Another company using excessive packaging materials. 😡 When will they learn that less is more? #wasteful #sustainability"
"Loving the new packaging update from my favorite brand! The colors are so vibrant, and it's much easier to open now. 👌 #packagedesign #userexperience"
"Had to spend 10 minutes trying to figure out how to open this package. 😓 Why do companies make it so complicated? #frustrated #packaging"
"Can we take a moment to appreciate the creativity and attention to detail in this packaging? It tells a story and creates an emotional connection. 🎉 #brandstorytelling #packagingdesign""#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_blocks_are_non_empty() {
        for block in [SAMPLE_REVIEWS, SAMPLE_SURVEYS, SAMPLE_SOCIAL] {
            assert!(!block.trim().is_empty());
        }
    }
}
