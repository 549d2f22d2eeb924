//! Bundled department profiles, compiled into the binary. These are the
//! fallback tier for the public detail page: served whenever the dynamic
//! collection has no record for the slug (or the store is unreachable),
//! and never written back. The seed run copies them into the store as the
//! initial dynamic content.

use crate::domain::{DepartmentContact, DepartmentProfile, DepartmentSlug};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The bundled profile for one department.
pub fn bundled_department(slug: DepartmentSlug) -> DepartmentProfile {
    match slug {
        DepartmentSlug::Civil => DepartmentProfile {
            id: "civil".to_string(),
            name: "Civil Engineering".to_string(),
            tagline: "Building the Foundation of Modern Society".to_string(),
            established: 1959,
            description: "The Department of Civil Engineering at SVUCE is one of the oldest and \
                most prestigious departments. We focus on creating sustainable infrastructure \
                solutions and producing engineers capable of tackling global challenges in \
                construction, water resources, and environmental engineering."
                .to_string(),
            vision: "To be a global center of excellence in Civil Engineering education and \
                research, fostering sustainable development and infrastructure."
                .to_string(),
            mission: strings(&[
                "To provide high-quality education in Civil Engineering theory and practice.",
                "To conduct cutting-edge research in structural, geotechnical, and environmental engineering.",
                "To collaborate with industry for real-world problem solving.",
            ]),
            hod: "Dr. A. Ramakrishna".to_string(),
            programs: strings(&[
                "B.Tech in Civil Engineering",
                "M.Tech in Structural Engineering",
                "M.Tech in Geotechnical Engineering",
                "M.Tech in Environmental Engineering",
            ]),
            labs: strings(&[
                "Structural Engineering Lab",
                "Geotechnical Engineering Lab",
                "Environmental Engineering Lab",
                "Transportation Engineering Lab",
                "Surveying Lab",
            ]),
            contact: DepartmentContact {
                email: "hod_civil@svuce.edu.in".to_string(),
                phone: "+91-877-2289561".to_string(),
            },
        },
        DepartmentSlug::Eee => DepartmentProfile {
            id: "eee".to_string(),
            name: "Electrical & Electronics Engineering".to_string(),
            tagline: "Powering the Future".to_string(),
            established: 1959,
            description: "The EEE Department is dedicated to advancing the fields of electrical \
                power systems, control systems, and electronics. We prepare students to lead the \
                energy revolution and innovate in smart grid technologies."
                .to_string(),
            vision: "To lead the world in Electrical and Electronics Engineering through \
                innovative teaching and research."
                .to_string(),
            mission: strings(&[
                "To impart rigorous training in electrical systems and modern electronics.",
                "To promote research in renewable energy and power systems.",
                "To develop ethical and competent engineers.",
            ]),
            hod: "Dr. K. Sudha".to_string(),
            programs: strings(&[
                "B.Tech in Electrical & Electronics Engineering",
                "M.Tech in Power Systems",
                "M.Tech in Control Systems",
            ]),
            labs: strings(&[
                "Power Systems Lab",
                "Control Systems Lab",
                "Electrical Machines Lab",
                "Power Electronics Lab",
                "Simulation Lab",
            ]),
            contact: DepartmentContact {
                email: "hod_eee@svuce.edu.in".to_string(),
                phone: "+91-877-2289562".to_string(),
            },
        },
        DepartmentSlug::Mechanical => DepartmentProfile {
            id: "mechanical".to_string(),
            name: "Mechanical Engineering".to_string(),
            tagline: "Engineering Motion and Mechanics".to_string(),
            established: 1959,
            description: "Mechanical Engineering is the core of design and manufacturing. Our \
                department excels in teaching thermodynamics, robotics, and advanced \
                manufacturing processes."
                .to_string(),
            vision: "To be a premier hub for Mechanical Engineering education and innovation."
                .to_string(),
            mission: strings(&[
                "To provide a strong foundation in mechanical design and thermal sciences.",
                "To foster innovation in robotics and automation.",
                "To collaborate with industries for better placement and research.",
            ]),
            hod: "Dr. P. Venkataramaiah".to_string(),
            programs: strings(&[
                "B.Tech in Mechanical Engineering",
                "M.Tech in Industrial Engineering",
                "M.Tech in Machine Design",
            ]),
            labs: strings(&[
                "Thermal Engineering Lab",
                "Manufacturing Technology Lab",
                "Robotics Lab",
                "CAD/CAM Lab",
                "Heat Transfer Lab",
            ]),
            contact: DepartmentContact {
                email: "hod_mech@svuce.edu.in".to_string(),
                phone: "+91-877-2289563".to_string(),
            },
        },
        DepartmentSlug::Ece => DepartmentProfile {
            id: "ece".to_string(),
            name: "Electronics & Communication Engineering".to_string(),
            tagline: "Connecting the World".to_string(),
            established: 1970,
            description: "The ECE Department is at the forefront of the communication \
                revolution. We cover VLSI design, signal processing, and wireless communication \
                technologies."
                .to_string(),
            vision: "To produce globally competent Electronics and Communication Engineers."
                .to_string(),
            mission: strings(&[
                "To offer state-of-the-art curriculum in electronics and communication.",
                "To encourage research in VLSI and signal processing.",
                "To facilitate industry-institute interaction.",
            ]),
            hod: "Dr. T. Sreenivasulu Reddy".to_string(),
            programs: strings(&[
                "B.Tech in Electronics & Communication Engineering",
                "M.Tech in VLSI Design",
                "M.Tech in Communication Systems",
            ]),
            labs: strings(&[
                "VLSI Design Lab",
                "Digital Signal Processing Lab",
                "Microwave Engineering Lab",
                "Embedded Systems Lab",
                "Analog & Digital Communication Lab",
            ]),
            contact: DepartmentContact {
                email: "hod_ece@svuce.edu.in".to_string(),
                phone: "+91-877-2289564".to_string(),
            },
        },
        DepartmentSlug::Cse => DepartmentProfile {
            id: "cse".to_string(),
            name: "Computer Science & Engineering".to_string(),
            tagline: "Coding the Digital Future".to_string(),
            established: 1986,
            description: "The CSE Department is the hub of computing innovation. We train \
                students in algorithms, AI, software engineering, and data science to solve \
                complex real-world problems."
                .to_string(),
            vision: "To be a leader in Computer Science education and research.".to_string(),
            mission: strings(&[
                "To provide high-quality education in computing and software development.",
                "To promote research in AI, Data Science, and Cybersecurity.",
                "To prepare students for top-tier software careers.",
            ]),
            hod: "Dr. A. Rama Mohan Reddy".to_string(),
            programs: strings(&[
                "B.Tech in Computer Science & Engineering",
                "M.Tech in Computer Science",
                "Ph.D in Computer Science",
            ]),
            labs: strings(&[
                "AI & Machine Learning Lab",
                "Data Analytics Lab",
                "Software Engineering Lab",
                "Networking Lab",
                "Programming Lab",
            ]),
            contact: DepartmentContact {
                email: "hod_cse@svuce.edu.in".to_string(),
                phone: "+91-877-2289565".to_string(),
            },
        },
        DepartmentSlug::Chemical => DepartmentProfile {
            id: "chemical".to_string(),
            name: "Chemical Engineering".to_string(),
            tagline: "Engineering for a Sustainable Future".to_string(),
            established: 1970,
            description: "The Chemical Engineering Department focuses on process engineering, \
                material science, and sustainable chemical production technologies."
                .to_string(),
            vision: "To be a center of excellence in Chemical Engineering.".to_string(),
            mission: strings(&[
                "To impart quality education in chemical process engineering.",
                "To conduct research in green chemistry and sustainable materials.",
                "To develop leaders in the chemical industry.",
            ]),
            hod: "Dr. B. Sarath Babu".to_string(),
            programs: strings(&[
                "B.Tech in Chemical Engineering",
                "M.Tech in Chemical Engineering",
            ]),
            labs: strings(&[
                "Process Control Lab",
                "Mass Transfer Lab",
                "Heat Transfer Lab",
                "Chemical Reaction Engineering Lab",
                "Fluid Mechanics Lab",
            ]),
            contact: DepartmentContact {
                email: "hod_chemical@svuce.edu.in".to_string(),
                phone: "+91-877-2289566".to_string(),
            },
        },
    }
}

/// All six bundled profiles in slug order.
pub fn bundled_departments() -> Vec<DepartmentProfile> {
    DepartmentSlug::ALL.into_iter().map(bundled_department).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_slug_has_a_profile() {
        let profiles = bundled_departments();
        assert_eq!(profiles.len(), DepartmentSlug::ALL.len());
        for (slug, profile) in DepartmentSlug::ALL.into_iter().zip(&profiles) {
            assert_eq!(profile.id, slug.as_str());
            assert!(!profile.name.is_empty());
            assert!(!profile.hod.is_empty());
            assert_eq!(profile.mission.len(), 3);
        }
    }

    #[test]
    fn test_profiles_decode_through_record_schema() {
        // The fallback tier must satisfy the same schema as dynamic records.
        for profile in bundled_departments() {
            let value = serde_json::to_value(&profile).unwrap();
            let back: DepartmentProfile = serde_json::from_value(value).unwrap();
            assert_eq!(back, profile);
        }
    }
}
