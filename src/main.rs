// lextree: lexical analyzer and structure-tree visualizer for a C-like mini language

mod lexer;
mod tree;
mod ui;

use std::fs;
use std::io;
use std::path::Path;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use lexer::Scanner;
use tree::TreeBuilder;
use ui::App;

fn usage(program_name: &str) {
    eprintln!("Usage: {} [--tokens] [--tree] <file>", program_name);
    eprintln!();
    eprintln!("With no flags the TUI opens; flags print to stdout instead:");
    eprintln!("  --tokens   print the token list and exit");
    eprintln!("  --tree     print the indented structure tree and exit");
    eprintln!();
    eprintln!("Example:");
    eprintln!("  {} demos/sample.src", program_name);
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Vec<String> = std::env::args().collect();
    let program_name = args
        .first()
        .map(|s| s.as_str())
        .unwrap_or("lextree")
        .to_string();

    let mut print_tokens = false;
    let mut print_tree = false;
    let mut path: Option<String> = None;

    for arg in &args[1..] {
        match arg.as_str() {
            "--tokens" => print_tokens = true,
            "--tree" => print_tree = true,
            "-h" | "--help" => {
                usage(&program_name);
                return Ok(());
            }
            other if other.starts_with('-') => {
                eprintln!("Error: Unknown flag '{}'", other);
                eprintln!();
                usage(&program_name);
                std::process::exit(1);
            }
            other => {
                if path.is_some() {
                    eprintln!("Error: More than one input file given");
                    eprintln!();
                    usage(&program_name);
                    std::process::exit(1);
                }
                path = Some(other.to_string());
            }
        }
    }

    let Some(path) = path else {
        eprintln!("Error: No input file provided");
        eprintln!();
        usage(&program_name);
        std::process::exit(1);
    };

    if !Path::new(&path).exists() {
        eprintln!("Error: File '{}' not found", path);
        std::process::exit(1);
    }

    // Read source text
    let source = fs::read_to_string(&path)?;

    // Scan the source text
    eprintln!("Scanning {}...", path);
    let tokens = match Scanner::new(&source).tokenize() {
        Ok(tokens) => tokens,
        Err(e) => {
            eprintln!("Lexical error: {}", e);
            std::process::exit(1);
        }
    };
    eprintln!("Scanned {} tokens.", tokens.len());

    // Group the tokens into the structure tree
    let syntax_tree = match TreeBuilder::new().build(&tokens) {
        Ok(root) => root,
        Err(e) => {
            eprintln!("Structure error: {}", e);
            std::process::exit(1);
        }
    };
    eprintln!("Built structure tree with {} nodes.", syntax_tree.size());

    // Flag mode: print and exit without entering the TUI
    if print_tokens || print_tree {
        if print_tokens {
            for token in &tokens {
                println!("{}", token);
            }
        }
        if print_tree {
            print!("{}", syntax_tree);
        }
        return Ok(());
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(source, tokens, syntax_tree);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
