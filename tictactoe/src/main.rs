use std::{
    fmt,
    io::{self, BufRead, Write},
};

use clap::{App, Arg, ArgMatches};
use log::{debug, info};
use once_cell::sync::Lazy;
use rand::Rng;
use regex::Regex;

use gridgame::board::Location;
use gridgame::game::tictactoe::{CannotPlayReason, Game, Mark, Status};

/// Largest board the terminal rendering supports.
const MAX_SIZE: usize = 99;

/// Glyph set used to render the board.
struct Theme {
    name: &'static str,
    x: &'static str,
    o: &'static str,
    vacant: &'static str,
}

static THEMES: &[Theme] = &[
    Theme {
        name: "classic",
        x: "X",
        o: "O",
        vacant: "-",
    },
    Theme {
        name: "lowercase",
        x: "x",
        o: "o",
        vacant: "-",
    },
    Theme {
        name: "stars",
        x: "*",
        o: "+",
        vacant: ".",
    },
    Theme {
        name: "hash",
        x: "#",
        o: "@",
        vacant: ".",
    },
    Theme {
        name: "binary",
        x: "1",
        o: "0",
        vacant: "_",
    },
    Theme {
        name: "brackets",
        x: "[]",
        o: "()",
        vacant: "..",
    },
];

/// How the seats are filled: two people sharing the terminal, or one person
/// against the computer.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum GameMode {
    HumanVsHuman,
    HumanVsComputer,
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(match self {
            GameMode::HumanVsHuman => "two-player",
            GameMode::HumanVsComputer => "against the computer",
        })
    }
}

/// Command entered at the game prompt.
#[derive(Debug, Eq, PartialEq)]
enum Command {
    /// Play the current mark at the location.
    Move(Location),
    /// Reprint the board.
    Board,
    /// Start the round over with the same settings.
    New,
    /// Start a new round on a board of the given size.
    Size(usize),
    /// Switch who fills the seats, restarting the round.
    Mode(GameMode),
    /// Switch to the theme with the given index, or list themes.
    Theme(Option<usize>),
    About,
    Help,
    Quit,
}

fn main() -> io::Result<()> {
    env_logger::init();
    let matches = App::new("Tic-Tac-Toe")
        .version("1.0")
        .about("Simple command line tic-tac-toe game.")
        .arg(
            Arg::with_name("size")
                .short("s")
                .long("size")
                .value_name("SIZE")
                .help("board size; the board is always square")
                .takes_value(true)
                .default_value("3")
                .validator(validate_size),
        )
        .arg(
            Arg::with_name("mode")
                .short("m")
                .long("mode")
                .value_name("MODE")
                .help("play against another person (pvp) or the computer (pvc)")
                .takes_value(true)
                .possible_values(&["pvp", "hh", "pvc", "hc"])
                .case_insensitive(true)
                .default_value("pvp"),
        )
        .arg(
            Arg::with_name("theme")
                .short("t")
                .long("theme")
                .value_name("THEME")
                .help("board theme, 1-6")
                .takes_value(true)
                .possible_values(&["1", "2", "3", "4", "5", "6"])
                .default_value("1"),
        )
        .arg(
            Arg::with_name("first_player")
                .short("f")
                .long("first_player")
                .value_name("FIRST_PLAYER")
                .help("pre-specify who goes first when playing the computer")
                .takes_value(true)
                .possible_values(&["human", "me", "computer", "bot", "random", "rand"])
                .case_insensitive(true),
        )
        .get_matches();

    let stdin = io::stdin();
    let mut input = InputReader::new(stdin.lock());
    let mut rng = rand::thread_rng();

    let mut size: usize = matches.value_of("size").unwrap().parse().unwrap();
    let mut mode = match matches.value_of("mode").unwrap().to_ascii_lowercase().as_str() {
        "pvp" | "hh" => GameMode::HumanVsHuman,
        "pvc" | "hc" => GameMode::HumanVsComputer,
        _ => unreachable!(),
    };
    let mut theme: usize = matches.value_of("theme").unwrap().parse::<usize>().unwrap() - 1;

    // The human's mark in computer games. X always opens, so going first
    // means playing X.
    let mut human = Mark::X;
    if mode == GameMode::HumanVsComputer {
        human = choose_first(&matches, &mut input)?;
        println!("You are {}.", human);
    }

    let mut game = Game::new(size);
    info!("starting a {0}x{0} game, {1}", size, mode);
    println!("Tic-Tac-Toe. Type help or ? for commands.");

    loop {
        println!();
        show_board(&game, &THEMES[theme]);
        println!();

        // The computer takes its turn before anyone is prompted.
        if mode == GameMode::HumanVsComputer
            && game.status() == Status::InProgress
            && game.current() != human
        {
            take_bot_turn(&mut rng, &mut game);
            continue;
        }

        if game.status() != Status::InProgress {
            announce(game.status());
            if ask_play_again(&mut input)? {
                game = Game::new(size);
                continue;
            } else {
                return Ok(());
            }
        }

        let cmd = read_command(&game, &mut input)?;
        match cmd {
            Command::Move(loc) => match game.play(loc) {
                Ok(outcome) => debug!("played {:?}: {:?}", loc, outcome),
                Err(CannotPlayReason::OutOfBounds) => println!(
                    "That space is off the board. Rows and columns go from 0 to {}.",
                    game.size() - 1
                ),
                Err(CannotPlayReason::AlreadyOccupied) => {
                    println!("That space is already taken.")
                }
                // The prompt is only shown while the round is in progress.
                Err(CannotPlayReason::GameOver) => unreachable!(),
            },
            // The board is printed at the top of every loop anyway.
            Command::Board => {}
            Command::New => {
                if confirm_abandon(&game, &mut input)? {
                    game = Game::new(size);
                    info!("round restarted");
                }
            }
            Command::Size(new_size) if new_size == size => {
                println!("The board is already {0}x{0}.", size);
            }
            Command::Size(new_size) => {
                if confirm_abandon(&game, &mut input)? {
                    size = new_size;
                    game = Game::new(size);
                    info!("board resized to {0}x{0}", size);
                }
            }
            Command::Mode(new_mode) if new_mode == mode => {
                println!("Already playing {}.", mode);
            }
            Command::Mode(new_mode) => {
                if confirm_abandon(&game, &mut input)? {
                    mode = new_mode;
                    if mode == GameMode::HumanVsComputer {
                        human = ask_first(&mut input)?;
                        println!("You are {}.", human);
                    }
                    game = Game::new(size);
                    info!("mode switched, now {}", mode);
                }
            }
            Command::Theme(Some(index)) => {
                theme = index;
                println!("Theme set to {}.", THEMES[theme].name);
            }
            Command::Theme(None) => list_themes(theme),
            Command::About => {
                println!(
                    "Tic-Tac-Toe 1.0
Get a full row, column, or diagonal of your mark to win. X always moves
first. Boards larger than 3x3 still need a line across the whole board."
                );
            }
            Command::Help => {
                println!(
                    "Available Commands:
    move <row>,<col>  place your mark at the given spot, counting from 0.
        \"place\", \"put\", and \"mv\" work too, and the verb is optional:
        \"1,2\" on its own also works.
    board             reprint the board.
    new               start the round over with the same settings.
    size <n>          start a new round on an <n>x<n> board.
    mode <pvp|pvc>    play against another person or against the computer.
    theme [<n>]       list the board themes, or switch to theme <n>.
    about             show what this program is.
    quit              leave the game.",
                );
            }
            Command::Quit => {
                if confirm_abandon(&game, &mut input)? {
                    return Ok(());
                }
            }
        }
    }
}

/// Validator for the size argument: a number in range [1,99].
fn validate_size(val: String) -> Result<(), String> {
    match val.parse::<usize>() {
        Ok(size) if (1..=MAX_SIZE).contains(&size) => Ok(()),
        _ => Err(format!("size must be a number in range [1,{}]", MAX_SIZE)),
    }
}

/// Choose which [`Mark`] the human plays based on either args or cli input.
fn choose_first<B: BufRead>(
    matches: &ArgMatches,
    input: &mut InputReader<B>,
) -> io::Result<Mark> {
    Ok(if let Some(clichoice) = matches.value_of("first_player") {
        match clichoice.to_ascii_lowercase().as_str() {
            "human" | "me" => Mark::X,
            "computer" | "bot" => Mark::O,
            "random" | "rand" => rand::random(),
            _ => unreachable!(),
        }
    } else {
        ask_first(input)?
    })
}

/// Ask whether the human wants to open the game.
fn ask_first<B: BufRead>(input: &mut InputReader<B>) -> io::Result<Mark> {
    input.read_input_lower("Do you want to go first? (Y/n)", |input| match input {
        "yes" | "y" | "first" | "1" | "1st" | "" => Some(Mark::X),
        "no" | "n" | "second" | "2" | "2nd" => Some(Mark::O),
        _ => {
            println!("Invalid selection.");
            None
        }
    })
}

/// Ask before discarding a round that already has marks on the board.
fn confirm_abandon(game: &Game, input: &mut InputReader<impl BufRead>) -> io::Result<bool> {
    if game.status() != Status::InProgress || game.grid().filled() == 0 {
        return Ok(true);
    }
    input.read_input_lower("Abandon the current round? (y/N)", |input| match input {
        "yes" | "y" => Some(true),
        "no" | "n" | "" => Some(false),
        _ => {
            println!("Invalid selection.");
            None
        }
    })
}

/// Ask whether to start another round once this one is decided.
fn ask_play_again(input: &mut InputReader<impl BufRead>) -> io::Result<bool> {
    input.read_input_lower("Play again? (Y/n)", |input| match input {
        "yes" | "y" | "" => Some(true),
        "no" | "n" => Some(false),
        _ => {
            println!("Invalid selection.");
            None
        }
    })
}

/// Read the next command from the player whose turn it is.
fn read_command(game: &Game, input: &mut InputReader<impl BufRead>) -> io::Result<Command> {
    /// Matchers for commands with args.
    static MOVE: Lazy<Regex> = Lazy::new(|| {
        Regex::new(
            r"^(?x)(?:(?:place|put|move|mv|play|m)\s+)?
    (?P<row>[0-9]+)(?:\s*,\s*|\s+)(?P<col>[0-9]+)$",
        )
        .unwrap()
    });
    static SIZE: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"^(?x)(?:size|resize)\s+(?P<size>[0-9]+)$").unwrap());
    static MODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(?x)mode\s+(?P<mode>\w+)$").unwrap());
    static THEME: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"^(?x)(?:theme|skin)\s+(?P<theme>\w+)$").unwrap());

    let prompt = format!("{}>", game.current());
    input.read_input_lower(&prompt, |input| match input {
        "?" | "help" | "h" => Some(Command::Help),
        "board" | "show" => Some(Command::Board),
        "new" | "reset" | "restart" => Some(Command::New),
        "theme" | "themes" | "skins" => Some(Command::Theme(None)),
        "about" => Some(Command::About),
        "quit" | "exit" | "q" => Some(Command::Quit),
        other => {
            if let Some(captures) = MOVE.captures(other) {
                let row = match captures.name("row").unwrap().as_str().parse() {
                    Ok(row) => row,
                    Err(_) => {
                        println!("invalid row: {}", captures.name("row").unwrap().as_str());
                        return None;
                    }
                };
                let col = match captures.name("col").unwrap().as_str().parse() {
                    Ok(col) => col,
                    Err(_) => {
                        println!("invalid column: {}", captures.name("col").unwrap().as_str());
                        return None;
                    }
                };
                Some(Command::Move(Location::new(row, col)))
            } else if let Some(captures) = SIZE.captures(other) {
                match captures.name("size").unwrap().as_str().parse() {
                    Ok(size) if (1..=MAX_SIZE).contains(&size) => Some(Command::Size(size)),
                    _ => {
                        println!("size must be a number in range [1,{}]", MAX_SIZE);
                        None
                    }
                }
            } else if let Some(captures) = MODE.captures(other) {
                match captures.name("mode").unwrap().as_str() {
                    "pvp" | "hh" | "human" => Some(Command::Mode(GameMode::HumanVsHuman)),
                    "pvc" | "hc" | "computer" | "bot" => {
                        Some(Command::Mode(GameMode::HumanVsComputer))
                    }
                    other => {
                        println!("invalid mode: {}, choose \"pvp\" or \"pvc\"", other);
                        None
                    }
                }
            } else if let Some(captures) = THEME.captures(other) {
                match captures.name("theme").unwrap().as_str().parse::<usize>() {
                    Ok(theme) if (1..=THEMES.len()).contains(&theme) => {
                        Some(Command::Theme(Some(theme - 1)))
                    }
                    _ => {
                        println!(
                            "invalid theme: {}, type \"theme\" to list them",
                            captures.name("theme").unwrap().as_str()
                        );
                        None
                    }
                }
            } else {
                println!("Invalid command \"{}\". Use '?' for help", other);
                None
            }
        }
    })
}

/// Take the computer's turn: pick a random vacant cell and play it.
fn take_bot_turn(rng: &mut impl Rng, game: &mut Game) {
    if let Some(loc) = game.random_move(rng) {
        println!("Computer plays {},{}.", loc.row, loc.col);
        match game.play(loc) {
            Ok(outcome) => debug!("computer played {:?}: {:?}", loc, outcome),
            // random_move only offers vacant in-bounds cells.
            Err(reason) => debug!("computer move rejected: {}", reason),
        }
    }
}

/// Print the result of a decided round.
fn announce(status: Status) {
    match status {
        Status::Won(mark) => println!("{} wins!", mark),
        Status::Drawn => println!("It's a draw."),
        Status::InProgress => {}
    }
}

/// Print the available themes, marking the active one.
fn list_themes(current: usize) {
    println!("Available themes:");
    for (i, theme) in THEMES.iter().enumerate() {
        let marker = if i == current { "*" } else { " " };
        println!(
            " {} {}: {:10} {} {} {}",
            marker,
            i + 1,
            theme.name,
            theme.x,
            theme.o,
            theme.vacant
        );
    }
}

/// Show the board by printing the grid with row and column indexes.
fn show_board(game: &Game, theme: &Theme) {
    struct Cell<'a> {
        mark: Option<Mark>,
        theme: &'a Theme,
    }
    impl fmt::Display for Cell<'_> {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.pad(match self.mark {
                None => self.theme.vacant,
                Some(Mark::X) => self.theme.x,
                Some(Mark::O) => self.theme.o,
            })
        }
    }
    print!("   ");
    for i in 0..game.size() {
        print!("{:^4}", i);
    }
    println!();
    for (i, row) in game.iter_board().enumerate() {
        print!("{:>2} ", i);
        for mark in row {
            print!("{:^4}", Cell { mark, theme });
        }
        println!();
    }
}

/// Helper to read input from the player.
struct InputReader<B> {
    read: B,
    buf: String,
}

impl<B> InputReader<B> {
    fn new(read: B) -> Self {
        Self {
            read,
            buf: String::new(),
        }
    }
}

impl<B: BufRead> InputReader<B> {
    /// Repeatedly tries to read input until the input checker returns `Some`. Converts
    /// to ascii lower before running the checker.
    fn read_input_lower<F, T>(&mut self, prompt: &str, mut checker: F) -> io::Result<T>
    where
        F: FnMut(&str) -> Option<T>,
    {
        loop {
            self.read_input_inner(prompt)?;
            self.buf.make_ascii_lowercase();
            if let Some(val) = checker(self.buf.trim()) {
                return Ok(val);
            }
        }
    }

    /// Helper to print the prompt, clear the string buffer and read a line.
    fn read_input_inner(&mut self, prompt: &str) -> io::Result<()> {
        print!("{} ", prompt);
        io::stdout().flush()?;
        self.buf.clear();
        if self.read.read_line(&mut self.buf)? == 0 {
            println!();
            std::process::exit(0);
        }
        Ok(())
    }
}
