use crate::types::PlaylistResponse;

/// Format a playlist as human-readable markdown
pub fn format_playlist_readable(playlist: &PlaylistResponse, course_mode: bool) -> String {
    let mut output = String::new();

    // Title
    output.push_str(&format!("# {}\n\n", playlist.playlist_name));

    // Meta info
    output.push_str(&format!(
        "**Total:** {} | **Videos:** {}\n\n",
        playlist.total_duration,
        playlist.items.len()
    ));

    // Description
    output.push_str(&playlist.description);
    output.push_str("\n\n");

    // Items, in the order they were returned
    let heading = if course_mode { "Syllabus" } else { "Flow" };
    output.push_str(&format!("## {}\n\n", heading));
    for (i, item) in playlist.items.iter().enumerate() {
        let label = if course_mode {
            format!("Lesson {}", i + 1)
        } else {
            format!("{}", i + 1)
        };
        output.push_str(&format!(
            "### {}. {} [{}]\n\n",
            label, item.title, item.duration
        ));
        output.push_str(&format!("*{}*\n\n", item.channel_name));
        output.push_str(&format!("{}\n\n", item.description));
        output.push_str(&format!("> Why: {}\n\n", item.reasoning));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::VideoItem;

    fn item(title: &str) -> VideoItem {
        VideoItem {
            title: title.to_string(),
            channel_name: "Bake Lab".to_string(),
            duration: "12:30".to_string(),
            description: "desc".to_string(),
            reasoning: "because".to_string(),
        }
    }

    fn playlist() -> PlaylistResponse {
        PlaylistResponse {
            playlist_name: "Sourdough 101".to_string(),
            total_duration: "45 mins".to_string(),
            description: "From starter to loaf".to_string(),
            items: vec![item("Starter"), item("Shaping"), item("Baking")],
        }
    }

    #[test]
    fn test_flow_layout_keeps_order() {
        let text = format_playlist_readable(&playlist(), false);
        assert!(text.starts_with("# Sourdough 101\n"));
        assert!(text.contains("**Total:** 45 mins | **Videos:** 3"));
        assert!(text.contains("## Flow"));
        let starter = text.find("1. Starter [12:30]").unwrap();
        let shaping = text.find("2. Shaping").unwrap();
        let baking = text.find("3. Baking").unwrap();
        assert!(starter < shaping && shaping < baking);
        assert!(text.contains("> Why: because"));
        assert!(!text.contains("Lesson"));
    }

    #[test]
    fn test_course_layout_labels_lessons() {
        let text = format_playlist_readable(&playlist(), true);
        assert!(text.contains("## Syllabus"));
        assert!(text.contains("### Lesson 1. Starter"));
        assert!(text.contains("### Lesson 3. Baking"));
    }
}
