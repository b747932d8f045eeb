use crate::cli::context::CLIContext;
use crate::model::*;
use crate::queries::meeting_queries::{self, MeetingFilter};
use crate::validation;

pub fn create(ctx: &mut CLIContext) {
    let Some(name) = CLIContext::prompt_required("Name of the meeting: ", "name") else {
        return;
    };
    let Some(description) = ctx.prompt("Description of the meeting: ") else {
        return;
    };
    let Some(category) =
        ctx.prompt_parsed::<MeetingCategory>("Category of the meeting (CodeMonkey, Hub, Short or TeamBuilding): ")
    else {
        return;
    };
    let Some(meeting_type) = ctx.prompt_parsed::<MeetingType>("Type of the meeting (Live or InPerson): ") else {
        return;
    };
    let Some(start_date) = ctx.prompt_with("Start time of the meeting (YYYY-MM-DD HH:MM): ", |s| {
        validation::timestamp(s, "start time")
    }) else {
        return;
    };
    let Some(end_date) = ctx.prompt_with("End time of the meeting (YYYY-MM-DD HH:MM): ", |s| {
        validation::timestamp(s, "end time")
    }) else {
        return;
    };

    let meeting = Meeting::create(
        name,
        ctx.current_person().clone(),
        description,
        category,
        meeting_type,
        start_date,
        end_date,
    );

    match ctx.manager.add_meeting(meeting) {
        Ok(m) => println!("Successfully created meeting \"{}\"", m.name),
        Err(e) => ctx.print_error(&e),
    }
}

pub fn delete(ctx: &mut CLIContext) {
    let Some(name) = CLIContext::prompt_required("Name of the meeting you want to delete: ", "name") else {
        return;
    };

    match ctx.manager.delete_meeting(&name) {
        Ok(m) => println!("Meeting \"{}\" successfully deleted!", m.name),
        Err(e) => ctx.print_error(&e),
    }
}

pub fn list(ctx: &CLIContext) {
    let meetings = match ctx.manager.repo().load_all() {
        Ok(m) => m,
        Err(e) => {
            ctx.print_error(&e);
            return;
        }
    };

    println!(
        "Choose one of the following filters:\n\
         0 - no filter\n\
         1 - filter by description\n\
         2 - filter by responsible person\n\
         3 - filter by category\n\
         4 - filter by type\n\
         5 - filter by dates\n\
         6 - filter by number of attendees\n"
    );
    let Some(choice) = ctx.prompt("Type in the corresponding number: ") else {
        return;
    };

    let filter = match choice.as_str() {
        "0" => Some(MeetingFilter::All),
        "1" => ctx
            .prompt("Type in filter keyword: ")
            .map(MeetingFilter::Description),
        "2" => ctx
            .prompt_person("the responsible person")
            .map(MeetingFilter::ResponsiblePerson),
        "3" => ctx
            .prompt_parsed("Type in category (CodeMonkey, Hub, Short or TeamBuilding): ")
            .map(MeetingFilter::Category),
        "4" => ctx
            .prompt_parsed("Type in meeting type (Live or InPerson): ")
            .map(MeetingFilter::Type),
        "5" => prompt_dates(ctx),
        "6" => ctx
            .prompt_with("Type in the minimum number of attendees: ", |s| {
                validation::count(s, "number of attendees")
            })
            .map(MeetingFilter::MinAttendees),
        _ => {
            println!("Unrecognized filter!");
            None
        }
    };

    if let Some(filter) = filter {
        print_filtered(&meeting_queries::filter(&meetings, &filter));
    }
}

fn prompt_dates(ctx: &CLIContext) -> Option<MeetingFilter> {
    let from = ctx.prompt_with("Type in meeting start date (YYYY-MM-DD HH:MM): ", |s| {
        validation::timestamp(s, "start date")
    })?;
    let to = ctx.prompt_with("Type in meeting end date (YYYY-MM-DD HH:MM) (optional): ", |s| {
        validation::optional_timestamp(s, "end date")
    })?;
    Some(MeetingFilter::Dates { from, to })
}

fn print_filtered(meetings: &[&Meeting]) {
    if meetings.is_empty() {
        println!("No meetings found matching specified filters!");
        return;
    }
    for meeting in meetings {
        println!("{}", meeting);
    }
}

pub fn add_person(ctx: &mut CLIContext) {
    let Some(name) = CLIContext::prompt_required(
        "Type in the name of a meeting you want the person to be added to: ",
        "meeting name",
    ) else {
        return;
    };
    let Some(person) = ctx.prompt_person("the person to add") else {
        return;
    };

    match ctx.manager.add_person_to_meeting(&name, person.clone()) {
        Ok(added) => {
            if added.has_conflicts() {
                println!(
                    "Warning: this person has other meetings at the time of this meeting! ({})",
                    added.conflicts.join(", ")
                );
            }
            println!("Successfully added {} to meeting {}", person, added.meeting.name);
        }
        Err(e) => ctx.print_error(&e),
    }
}

pub fn remove_person(ctx: &mut CLIContext) {
    let Some(name) = CLIContext::prompt_required(
        "Type in the name of a meeting you want the person to be removed from: ",
        "meeting name",
    ) else {
        return;
    };
    let Some(person) = ctx.prompt_person("the person to remove") else {
        return;
    };

    match ctx.manager.remove_person_from_meeting(&name, &person) {
        Ok(m) => println!("Successfully removed {} from meeting {}", person, m.name),
        Err(e) => ctx.print_error(&e),
    }
}
