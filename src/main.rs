//! Competition program.
//!
//! On the V5 Brain this runs driver control with the policy chosen in
//! `drive.toml`. Built for any other target it replays a scripted drive
//! through the same pipeline and logs what the motors would have been told.

#[cfg(target_vendor = "vex")]
use log::{LevelFilter, info, warn};
#[cfg(target_vendor = "vex")]
use tiller::{
    config::{CONFIG_PATH, DriveConfig},
    drivetrain::Differential,
    fs::logger,
    opcontrol::teleop::Teleop,
    peripherals::controller::{ControllerButton, ControllerInput},
};
#[cfg(target_vendor = "vex")]
use vexide::{prelude::*, time::user_uptime};

/// Two-motor-per-side drivetrain robot.
#[cfg(target_vendor = "vex")]
struct Robot {
    controller: Controller,
    drivetrain: Differential<[Motor; 2], [Motor; 2]>,
    teleop:     Teleop,
}

#[cfg(target_vendor = "vex")]
impl Compete for Robot {
    async fn driver(&mut self) {
        info!("Driver control started ({:?} drive)", self.teleop.config().policy);
        loop {
            let input = ControllerInput::read(&self.controller, ControllerButton::ButtonB);
            let output = self.teleop.step(&input, &mut self.drivetrain, user_uptime());

            if output.rumble {
                // Gives feedback to the driver while the drive is inverted
                let pattern = self.teleop.rumble_pattern();
                self.controller.rumble(pattern).await.unwrap_or_else(|e| {
                    warn!("Controller Rumble Error: {}", e);
                });
            }

            sleep(self.teleop.tick_interval()).await;
        }
    }
}

#[cfg(target_vendor = "vex")]
#[vexide::main]
async fn main(peripherals: Peripherals) {
    if let Err(e) = logger::init(LevelFilter::Info) {
        println!("Logger init failed: {}", e);
    }

    let teleop = Teleop::new(DriveConfig::load_or_default(CONFIG_PATH));
    let mut drivetrain = Differential::new(
        [
            Motor::new(peripherals.port_1, Gearset::Green, Direction::Forward),
            Motor::new(peripherals.port_2, Gearset::Green, Direction::Forward),
        ],
        // Right side is mirrored, so it spins reversed to drive forward.
        [
            Motor::new(peripherals.port_3, Gearset::Green, Direction::Reverse),
            Motor::new(peripherals.port_4, Gearset::Green, Direction::Reverse),
        ],
    );
    drivetrain.configure(teleop.config());

    Robot {
        controller: peripherals.primary_controller,
        drivetrain,
        teleop,
    }
    .compete()
    .await;
}

#[cfg(not(target_vendor = "vex"))]
fn main() {
    use std::time::Duration;

    use log::{LevelFilter, info};
    use tiller::{
        config::{CONFIG_PATH, DriveConfig},
        drivetrain::Differential,
        fs::logger,
        opcontrol::teleop::Teleop,
        sim::{self, LoggedMotorGroup},
    };

    if let Err(e) = logger::init(LevelFilter::Debug) {
        eprintln!("Logger init failed: {}", e);
    }

    let mut teleop = Teleop::new(DriveConfig::load_or_default(CONFIG_PATH));
    let mut drivetrain =
        Differential::new(LoggedMotorGroup::new("left"), LoggedMotorGroup::new("right"));
    drivetrain.configure(teleop.config());

    info!("Replaying demo drive ({:?} drive)", teleop.config().policy);
    let outputs = sim::replay(&mut teleop, &mut drivetrain, &sim::demo_script(), Duration::ZERO);
    info!(
        "{} ticks, ended {}, {} rumble ticks",
        outputs.len(),
        teleop.mode(),
        outputs.iter().filter(|o| o.rumble).count()
    );
    log::logger().flush();
}
