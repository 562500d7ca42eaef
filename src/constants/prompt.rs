pub const PREVIEW_TREE: &str = r#"
           *
          ***
          /_\
         /_\_\
        /_/_/_\
         |   |
         |___|"#;

pub const WELCOME_TEXT: &str = r#"
Welcome to the Christmas Tree generator! Above is our current Christmas tree right now.
It seems pretty small, so let's add some length to it!
Aim for a positive even number somewhere between 2 and 26 (bigger even numbers up to 200
work too, as long as your terminal is wide enough).
"#;

/// Tallest body the prompt accepts. Row width grows with height, so unbounded answers would not fit any terminal.
pub const MAX_EXTRA_LINES: i64 = 200;

pub const LINES_PROMPT: &str = "Enter a positive even number: ";
pub const LINES_RETRY: &str = "Seems like this is not a positive even number up to 200. Let's try again!";

pub const LIGHTS_PROMPT: &str = "What light type do you want? Randomized or Patternized? (r/p): ";
pub const LIGHTS_RETRY: &str = "Enter either 'r' or 'p': ";

pub const TEASER_TEXT: &str = "Generating your Christmas Tree";
pub const TEASER_DOTS: usize = 4;
