mod app;
mod audio;
mod collection;
mod config;
mod error;
mod page;
mod picture;
mod runtime;
mod ui;

#[cfg(test)]
mod test_support;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    runtime::run()
}
