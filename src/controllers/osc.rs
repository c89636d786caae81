// src/controllers/osc.rs
// OSC tap input: a receiver that queues commands for the stage, and a sender
// used to loop keyboard taps back through the same path.

use nannou_osc as osc;
use std::error::Error;

pub const TAP_ADDR: &str = "/stage/tap";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OscCommand {
    Tap,
}

/// Maps one OSC message to a command. Unknown addresses are logged and dropped;
/// arguments on a tap are ignored.
pub fn parse_message(message: &osc::Message) -> Option<OscCommand> {
    match message.addr.as_str() {
        TAP_ADDR => Some(OscCommand::Tap),
        _ => {
            log::warn!("Unknown OSC address pattern: {}", message.addr);
            None
        }
    }
}

pub struct OscController {
    command_queue: Vec<OscCommand>,
    receiver: osc::Receiver,
}

impl OscController {
    pub fn new(port: u16) -> Result<Self, Box<dyn Error>> {
        let receiver = osc::receiver(port)?;
        log::info!("Listening for OSC taps on port {}", port);

        Ok(Self {
            command_queue: Vec::new(),
            receiver,
        })
    }

    /// Drains pending packets without blocking.
    pub fn process_messages(&mut self) {
        for (packet, _addr) in self.receiver.try_iter() {
            for message in packet.into_msgs() {
                if let Some(command) = parse_message(&message) {
                    self.command_queue.push(command);
                }
            }
        }
    }

    pub fn take_commands(&mut self) -> Vec<OscCommand> {
        std::mem::take(&mut self.command_queue)
    }
}

pub struct OscSender {
    sender: osc::Sender,
    target_addr: String,
    target_port: u16,
}

impl OscSender {
    pub fn new(target_port: u16) -> Result<Self, Box<dyn Error>> {
        let target_addr = "127.0.0.1".to_string();
        let sender = osc::sender()?;

        Ok(Self {
            sender,
            target_addr,
            target_port,
        })
    }

    pub fn send_tap(&self) {
        let addr = TAP_ADDR.to_string();
        let args: Vec<osc::Type> = Vec::new();
        if let Err(e) = self
            .sender
            .send((addr, args), (self.target_addr.as_str(), self.target_port))
        {
            log::warn!("Failed to send OSC tap: {:?}", e);
        }
    }
}
