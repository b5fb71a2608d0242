use crate::models::ResumeDocument;

/// Lists every required field that is still empty, as a JSON-style path.
///
/// Required means what the build form marks `required`: all personal details
/// except the picture, every element field except a work entry's end date,
/// and every achievement line. Whitespace counts as a value. Optional
/// education metadata is never required.
pub fn missing_required_fields(doc: &ResumeDocument) -> Vec<String> {
    let mut missing = Vec::new();
    let mut check = |path: String, value: &str| {
        if value.is_empty() {
            missing.push(path);
        }
    };

    let info = &doc.personal_info;
    for (field, value) in [
        ("name", &info.name),
        ("title", &info.title),
        ("email", &info.email),
        ("phone", &info.phone),
        ("location", &info.location),
        ("summary", &info.summary),
    ] {
        check(format!("personalInfo.{field}"), value);
    }

    for (i, skill) in doc.skills.iter().enumerate() {
        check(format!("skills[{i}].name"), &skill.name);
    }

    for (i, edu) in doc.education.iter().enumerate() {
        check(format!("education[{i}].degree"), &edu.degree);
        check(format!("education[{i}].institution"), &edu.institution);
        check(format!("education[{i}].graduationYear"), &edu.graduation_year);
    }

    for (i, lang) in doc.languages.iter().enumerate() {
        check(format!("languages[{i}].name"), &lang.name);
        check(format!("languages[{i}].proficiency"), &lang.proficiency);
    }

    for (i, exp) in doc.work_experience.iter().enumerate() {
        check(format!("workExperience[{i}].position"), &exp.position);
        check(format!("workExperience[{i}].company"), &exp.company);
        check(format!("workExperience[{i}].location"), &exp.location);
        check(format!("workExperience[{i}].startDate"), &exp.start_date);
        for (j, achievement) in exp.achievements.iter().enumerate() {
            check(format!("workExperience[{i}].achievements[{j}]"), achievement);
        }
    }

    for (i, course) in doc.courses.iter().enumerate() {
        check(format!("courses[{i}].name"), &course.name);
        check(format!("courses[{i}].provider"), &course.provider);
    }

    for (i, interest) in doc.interests.iter().enumerate() {
        check(format!("interests[{i}].name"), &interest.name);
    }

    missing
}
