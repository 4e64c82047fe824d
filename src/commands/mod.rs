use std::path::PathBuf;
use std::str::FromStr;

use crate::entities::ProfileField;
use crate::host::location::LocationService;
use crate::session::{LocationTicket, Session};

pub const HELP: &str = "\
start                 iniciar
create                crear perfil
name <texto>          nombre
age <texto>           edad
desc <texto>          descripción
photo <ruta>          agregar foto (máx. 3)
locate                activar ubicación
finish                finalizar perfil
edit                  editar perfil desde el feed
meet <id>             enviar solicitud de amistad
show                  mostrar pantalla
help                  esta ayuda
quit                  salir";

/// One line typed by the user
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Start,
    CreateProfile,
    SetField(ProfileField, String),
    AddPhoto(PathBuf),
    RequestLocation,
    Finish,
    Edit,
    Meet(u32),
    Show,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word {
            "start" => Command::Start,
            "create" => Command::CreateProfile,
            "name" => Command::SetField(ProfileField::Name, rest.to_string()),
            "age" => Command::SetField(ProfileField::Age, rest.to_string()),
            "desc" => Command::SetField(ProfileField::Description, rest.to_string()),
            "photo" if !rest.is_empty() => Command::AddPhoto(PathBuf::from(rest)),
            "photo" => return Err("photo needs a file path".to_string()),
            "locate" => Command::RequestLocation,
            "finish" => Command::Finish,
            "edit" => Command::Edit,
            "meet" => Command::Meet(
                rest.parse()
                    .map_err(|_| format!("meet needs a numeric id, got '{rest}'"))?,
            ),
            "show" | "" => Command::Show,
            "help" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => return Err(format!("unknown command '{other}', try 'help'")),
        };
        Ok(command)
    }
}

/// Follow-up work the host has to do after a command
#[derive(Debug, PartialEq)]
pub enum Outcome {
    Render,
    AwaitLocation(LocationTicket),
    LoadPhoto(PathBuf),
    Help,
    Quit,
}

/// Apply a command to the session. Rejected transitions are logged by the
/// session and still re-render, so the user sees any notice they produced.
pub fn dispatch(
    session: &mut Session,
    command: Command,
    location: &dyn LocationService,
) -> Outcome {
    match command {
        Command::Start => {
            let _ = session.start();
        }
        Command::CreateProfile => {
            let _ = session.create_profile();
        }
        Command::SetField(field, value) => session.update_profile_field(field, value),
        Command::AddPhoto(path) => return Outcome::LoadPhoto(path),
        Command::RequestLocation => {
            if let Some(ticket) = session.request_location(location) {
                return Outcome::AwaitLocation(ticket);
            }
        }
        Command::Finish => {
            let _ = session.finish();
        }
        Command::Edit => {
            let _ = session.edit();
        }
        Command::Meet(id) => {
            if let Err(error) = session.send_friend_request(id) {
                tracing::warn!(%error, "Friend request rejected");
            }
        }
        Command::Show => {}
        Command::Help => return Outcome::Help,
        Command::Quit => return Outcome::Quit,
    }
    Outcome::Render
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::candidate::default_roster;
    use crate::host::location::{DeniedLocation, UnsupportedLocation};
    use crate::session::Screen;

    #[test]
    fn test_parse_commands() {
        assert_eq!("start".parse::<Command>(), Ok(Command::Start));
        assert_eq!(
            "  name  Julieta Pérez ".parse::<Command>(),
            Ok(Command::SetField(ProfileField::Name, "Julieta Pérez".to_string()))
        );
        assert_eq!(
            "age".parse::<Command>(),
            Ok(Command::SetField(ProfileField::Age, String::new()))
        );
        assert_eq!(
            "photo /tmp/a b.png".parse::<Command>(),
            Ok(Command::AddPhoto(PathBuf::from("/tmp/a b.png")))
        );
        assert_eq!("meet 3".parse::<Command>(), Ok(Command::Meet(3)));
        assert_eq!("".parse::<Command>(), Ok(Command::Show));
        assert_eq!("exit".parse::<Command>(), Ok(Command::Quit));
    }

    #[test]
    fn test_parse_errors() {
        assert!("photo".parse::<Command>().is_err());
        assert!("meet Ana".parse::<Command>().is_err());
        assert!("dance".parse::<Command>().is_err());
    }

    #[test]
    fn test_dispatch_flow() {
        let mut session = Session::new(default_roster());
        let location = DeniedLocation;

        assert_eq!(dispatch(&mut session, Command::Start, &location), Outcome::Render);
        assert_eq!(
            dispatch(&mut session, Command::CreateProfile, &location),
            Outcome::Render
        );
        assert_eq!(session.screen(), Screen::ProfileEditing);

        let outcome = dispatch(&mut session, Command::RequestLocation, &location);
        assert!(matches!(outcome, Outcome::AwaitLocation(t) if t.issued_on == Screen::ProfileEditing));

        assert_eq!(dispatch(&mut session, Command::Finish, &location), Outcome::Render);
        assert_eq!(session.screen(), Screen::ProfileEditing);
    }

    #[test]
    fn test_dispatch_unsupported_location_renders() {
        let mut session = Session::new(default_roster());
        assert_eq!(
            dispatch(&mut session, Command::RequestLocation, &UnsupportedLocation),
            Outcome::Render
        );
        assert!(!session.notice().is_empty());
    }
}
