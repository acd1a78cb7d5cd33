//! Menu text and choice parsing.

use std::fmt;
use std::str::FromStr;

/// Open-book banner printed above the menu.
pub const BANNER: &str = r"
      __...--~~~~~-._   _.-~~~~~--...__
    //               `V'               \\
   //                 |                 \\
  //__...--~~~~~~-._  |  _.-~~~~~~--...__\\
 //__.....----~~~~._\ | /_.~~~~----.....__\\
====================\\|//====================
                    `---`
";

/// A menu entry selected by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Add a word and its meaning
    Add,
    /// Remove a word
    Remove,
    /// Look up a word's meaning
    Search,
    /// List words starting with a prefix
    Autocomplete,
    /// List every word and meaning
    Show,
    /// Remove every word
    Clear,
    /// Leave the session
    Exit,
}

impl MenuChoice {
    /// All entries in menu order.
    pub const ALL: [MenuChoice; 7] = [
        MenuChoice::Add,
        MenuChoice::Remove,
        MenuChoice::Search,
        MenuChoice::Autocomplete,
        MenuChoice::Show,
        MenuChoice::Clear,
        MenuChoice::Exit,
    ];

    /// The number typed to select this entry.
    pub fn number(self) -> u8 {
        match self {
            MenuChoice::Add => 1,
            MenuChoice::Remove => 2,
            MenuChoice::Search => 3,
            MenuChoice::Autocomplete => 4,
            MenuChoice::Show => 5,
            MenuChoice::Clear => 6,
            MenuChoice::Exit => 7,
        }
    }

    /// Menu label.
    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::Add => "Add word",
            MenuChoice::Remove => "Remove word",
            MenuChoice::Search => "Search word",
            MenuChoice::Autocomplete => "Autocomplete suggestions",
            MenuChoice::Show => "Show dictionary",
            MenuChoice::Clear => "Clear dictionary",
            MenuChoice::Exit => "Exit",
        }
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.number(), self.label())
    }
}

/// The token did not name a menu entry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid menu choice: {0:?}")]
pub struct InvalidChoice(pub String);

impl FromStr for MenuChoice {
    type Err = InvalidChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let number: u8 = s.trim().parse().map_err(|_| InvalidChoice(s.to_string()))?;
        MenuChoice::ALL
            .into_iter()
            .find(|choice| choice.number() == number)
            .ok_or_else(|| InvalidChoice(s.to_string()))
    }
}

/// Renders the framed menu.
pub fn render_menu() -> String {
    let mut menu = String::from("===== MENU =====\n");
    for choice in MenuChoice::ALL {
        menu.push_str(&format!("{choice}\n"));
    }
    menu.push_str("================\n");
    menu
}
