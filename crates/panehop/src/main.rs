mod app;
mod config;
mod input;
mod keymap;
mod labels;
mod overlay;
mod panes;
mod picker;
mod tmux;
mod ui;

#[cfg(test)]
mod test_utils;

fn main() {
    if let Err(err) = app::run() {
        eprintln!("panehop: {err}");
        std::process::exit(1);
    }
}
