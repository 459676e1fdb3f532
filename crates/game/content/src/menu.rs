//! Title screen text and frame characters.

pub const GAME_TITLE: &str = "Astral Nexus";
pub const GAME_VERSION: &str = "1.0.0";

pub const GAME_LOGO: &str = r"   _       _             _       __
  /_\  ___| |_ _ __ __ _| |   /\ \ \_____  ___   _ ___
 //_\\/ __| __| '__/ _` | |  /  \/ / _ \ \/ / | | / __|
/  _  \__ \ |_| | | (_| | | / /\  /  __/>  <| |_| \__ \
\_/ \_/___/\__|_|  \__,_|_| \_\ \/ \___/_/\_\\__,_|___/";

pub const TAGLINE: &str = "A text-based space exploration game";

pub const MENU_HINT: &str = "Use ↑↓ arrows to navigate, ENTER to select";
pub const GOODBYE: &str = "Goodbye! Thanks for playing Astral Nexus!";

/// Entries of the main menu, in display order.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter, strum::EnumCount,
)]
pub enum MenuOption {
    Play,
    Continue,
    Settings,
    About,
    Exit,
}

impl MenuOption {
    pub const ALL: [MenuOption; 5] = [
        MenuOption::Play,
        MenuOption::Continue,
        MenuOption::Settings,
        MenuOption::About,
        MenuOption::Exit,
    ];

    pub const fn description(self) -> &'static str {
        match self {
            MenuOption::Play => "Start a new adventure in the Astral Nexus",
            MenuOption::Continue => "Resume your last saved journey",
            MenuOption::Settings => "Customize your game experience",
            MenuOption::About => "Learn more about the game and its creators",
            MenuOption::Exit => "Close the game and return to reality",
        }
    }
}

/// Box-drawing characters for framed scenes.
#[derive(Clone, Copy, Debug)]
pub struct BoxChars {
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub horizontal: char,
    pub vertical: char,
}

impl BoxChars {
    pub const SINGLE: Self = Self {
        top_left: '┌',
        top_right: '┐',
        bottom_left: '└',
        bottom_right: '┘',
        horizontal: '─',
        vertical: '│',
    };

    pub fn top(&self, inner: usize) -> String {
        self.edge(self.top_left, self.top_right, inner)
    }

    pub fn bottom(&self, inner: usize) -> String {
        self.edge(self.bottom_left, self.bottom_right, inner)
    }

    fn edge(&self, left: char, right: char, inner: usize) -> String {
        let mut line = String::with_capacity(inner + 2);
        line.push(left);
        line.extend(std::iter::repeat_n(self.horizontal, inner));
        line.push(right);
        line
    }
}
