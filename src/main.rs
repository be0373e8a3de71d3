use chromapack::config::{LoggingConfig, init_logging};
use chromapack::{ColorLink, LinkConfig, TracingSink};

const DEFAULT_MESSAGE: &str = "Hello from chromapack";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging(&LoggingConfig::default())?;

    // Usage: chromapack [--config link.toml] [message]
    let mut config = LinkConfig::default();
    let mut message = DEFAULT_MESSAGE.to_string();
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--config" {
            let path = args.next().ok_or("--config needs a path")?;
            config = LinkConfig::load(path)?;
        } else {
            message = arg;
        }
    }

    let mut link = ColorLink::new(config, TracingSink::new())?;
    let command_count = link.set_send_data(message.as_bytes()).len();
    println!(
        "{} bytes -> {} words -> {} commands ({} time units)",
        message.len(),
        link.encoder().words().len(),
        command_count,
        link.encoder().airtime().value()
    );
    for (i, cmd) in link.send_commands().iter().enumerate() {
        println!("{i:5}: {:<5} for {}", cmd.color.to_string(), cmd.duration.value());
    }

    let packets = link.loopback();
    let words = link.encoder().words().len();
    let received = link.received_data();
    let recovered = &received[..message.len().min(words * 2)];
    println!(
        "validated {packets} packets, recovered: {:?}",
        String::from_utf8_lossy(recovered)
    );
    Ok(())
}
