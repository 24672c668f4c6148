//! Role router.
//!
//! The resolved role selects exactly one [`RouteSet`]. Commands outside the
//! mounted set are refused; with no role only the login route is mounted and
//! everything else renders a "log in" notice instead of failing.

use roll_core::enums::Role;

use crate::cli::Commands;
use crate::cli::subcommands::StudentCommands;

/// A mounted route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    /// Admin resource: lessons, with their files and enrollments.
    Lessons,
    /// Admin resource: users.
    Users,
    /// Admin resource: attendance records.
    Attendance,
    /// Student `/`: enrolled lessons and face registration.
    StudentHome,
    /// Student `/lessons/:id`: lesson detail, downloads, check-in.
    StudentLesson,
    Login,
}

impl Route {
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Lessons => "lessons",
            Self::Users => "users",
            Self::Attendance => "attendance",
            Self::StudentHome => "/",
            Self::StudentLesson => "/lessons/:id",
            Self::Login => "/login",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteSet {
    Admin,
    Student,
    Fallback,
}

/// Routing decision for one command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Admission {
    Allowed,
    /// No role: show the login notice.
    LoginRequired,
    /// A role is resolved but this route is not mounted for it.
    Refused { route: Route, routes: RouteSet },
}

impl RouteSet {
    #[must_use]
    pub const fn for_role(role: Option<Role>) -> Self {
        match role {
            Some(Role::Teacher) => Self::Admin,
            Some(Role::Student) => Self::Student,
            None => Self::Fallback,
        }
    }

    #[must_use]
    pub const fn mounted(self) -> &'static [Route] {
        match self {
            Self::Admin => &[Route::Lessons, Route::Users, Route::Attendance],
            Self::Student => &[Route::StudentHome, Route::StudentLesson],
            Self::Fallback => &[Route::Login],
        }
    }

    #[must_use]
    pub fn admit(self, route: Route) -> Admission {
        if self.mounted().contains(&route) {
            Admission::Allowed
        } else if self == Self::Fallback {
            Admission::LoginRequired
        } else {
            Admission::Refused {
                route,
                routes: self,
            }
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Admin => "teacher",
            Self::Student => "student",
            Self::Fallback => "anonymous",
        }
    }
}

/// Route a command targets. `auth` commands map to the login route.
#[must_use]
pub const fn route_for(command: &Commands) -> Route {
    match command {
        Commands::Auth { .. } => Route::Login,
        Commands::Lesson { .. } | Commands::File { .. } | Commands::Enrollment { .. } => {
            Route::Lessons
        }
        Commands::User { .. } => Route::Users,
        Commands::Attendance { .. } => Route::Attendance,
        Commands::Student { action } => match action {
            StudentCommands::Lessons | StudentCommands::RegisterFace { .. } => {
                Route::StudentHome
            }
            StudentCommands::Lesson { .. }
            | StudentCommands::Attend(_)
            | StudentCommands::Download { .. } => Route::StudentLesson,
        },
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::cli::Cli;

    fn route_of(args: &[&str]) -> Route {
        let cli = Cli::try_parse_from(args).expect("cli should parse");
        route_for(&cli.command)
    }

    #[test]
    fn teacher_mounts_only_admin_resources() {
        let routes = RouteSet::for_role(Some(Role::Teacher));
        assert_eq!(routes, RouteSet::Admin);
        assert_eq!(
            routes.mounted(),
            &[Route::Lessons, Route::Users, Route::Attendance]
        );
        assert!(!routes.mounted().contains(&Route::StudentHome));
        assert!(!routes.mounted().contains(&Route::StudentLesson));
    }

    #[test]
    fn student_mounts_exactly_two_routes() {
        let routes = RouteSet::for_role(Some(Role::Student));
        let paths: Vec<&str> = routes.mounted().iter().map(|r| r.path()).collect();
        assert_eq!(paths, vec!["/", "/lessons/:id"]);
    }

    #[test]
    fn no_role_mounts_login_only() {
        let routes = RouteSet::for_role(None);
        assert_eq!(routes.mounted(), &[Route::Login]);
        assert_eq!(routes.admit(Route::Lessons), Admission::LoginRequired);
        assert_eq!(routes.admit(Route::StudentHome), Admission::LoginRequired);
    }

    #[test]
    fn student_cannot_reach_admin_resources() {
        assert_eq!(
            RouteSet::Student.admit(Route::Users),
            Admission::Refused {
                route: Route::Users,
                routes: RouteSet::Student,
            }
        );
        assert_eq!(RouteSet::Student.admit(Route::StudentLesson), Admission::Allowed);
    }

    #[test]
    fn teacher_cannot_reach_student_routes() {
        assert!(matches!(
            RouteSet::Admin.admit(Route::StudentHome),
            Admission::Refused { .. }
        ));
    }

    #[rstest]
    #[case(&["roll", "lesson", "list"], Route::Lessons)]
    #[case(&["roll", "file", "upload", "1", "a.pdf"], Route::Lessons)]
    #[case(&["roll", "enrollment", "add", "1", "--user", "7"], Route::Lessons)]
    #[case(&["roll", "user", "list"], Route::Users)]
    #[case(&["roll", "attendance", "list"], Route::Attendance)]
    #[case(&["roll", "student", "lessons"], Route::StudentHome)]
    #[case(&["roll", "student", "register-face"], Route::StudentHome)]
    #[case(&["roll", "student", "lesson", "3"], Route::StudentLesson)]
    #[case(&["roll", "student", "attend", "3"], Route::StudentLesson)]
    #[case(&["roll", "student", "download", "9"], Route::StudentLesson)]
    #[case(&["roll", "auth", "status"], Route::Login)]
    fn commands_map_to_routes(#[case] args: &[&str], #[case] expected: Route) {
        assert_eq!(route_of(args), expected);
    }
}
