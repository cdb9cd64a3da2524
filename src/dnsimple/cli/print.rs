use colored::Colorize;
use dnsimple::commands::{CmdMessage, CmdResult, MessageLevel};

pub(super) fn print_result(result: &CmdResult) {
    for line in &result.lines {
        println!("{}", line);
    }
    print_messages(&result.messages);
}

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}
